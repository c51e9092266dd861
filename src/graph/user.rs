//! User records held by the social graph

use std::collections::{BTreeSet, HashMap};

/// A member of the social network.
///
/// `id` and `name` are fixed at construction. A new record has no
/// relations; `friends` and `visited_profiles` are only mutated by
/// [`SocialGraph`](super::SocialGraph), which keeps friendship symmetric
/// across both endpoints and only links registered ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: String,
    name: String,
    friends: BTreeSet<String>,
    visited_profiles: HashMap<String, u32>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            friends: BTreeSet::new(),
            visited_profiles: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct friends, ordered by id
    pub fn friends(&self) -> &BTreeSet<String> {
        &self.friends
    }

    pub fn is_friend_with(&self, id: &str) -> bool {
        self.friends.contains(id)
    }

    /// Profiles this user has visited, with visit counts
    pub fn visited_profiles(&self) -> &HashMap<String, u32> {
        &self.visited_profiles
    }

    /// Times this user visited `id`; zero when never recorded
    pub fn visits_to(&self, id: &str) -> u32 {
        self.visited_profiles.get(id).copied().unwrap_or(0)
    }

    /// Returns false when `id` was already a friend
    pub(crate) fn insert_friend(&mut self, id: &str) -> bool {
        !self.friends.contains(id) && self.friends.insert(id.to_string())
    }

    /// Add `n` visits to `id`, saturating at `u32::MAX`
    pub(crate) fn add_visits(&mut self, id: &str, n: u32) -> u32 {
        let count = self.visited_profiles.entry(id.to_string()).or_insert(0);
        *count = count.saturating_add(n);
        *count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_empty() {
        let user = User::new("alice", "Alice");
        assert_eq!(user.id(), "alice");
        assert_eq!(user.name(), "Alice");
        assert!(user.friends().is_empty());
        assert_eq!(user.visits_to("bob"), 0);
    }

    #[test]
    fn test_insert_friend_is_set_like() {
        let mut user = User::new("alice", "Alice");
        assert!(user.insert_friend("bob"));
        assert!(!user.insert_friend("bob"));
        assert_eq!(user.friends().len(), 1);
        assert!(user.is_friend_with("bob"));
    }

    #[test]
    fn test_add_visits_counts_up() {
        let mut user = User::new("alice", "Alice");
        assert_eq!(user.add_visits("bob", 1), 1);
        assert_eq!(user.add_visits("bob", 1), 2);
        assert_eq!(user.visits_to("bob"), 2);
    }

    #[test]
    fn test_add_visits_saturates() {
        let mut user = User::new("alice", "Alice");
        user.add_visits("bob", u32::MAX - 1);
        assert_eq!(user.add_visits("bob", 5), u32::MAX);
    }
}
