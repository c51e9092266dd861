//! Social Graph Store
//!
//! Owns every [`User`] keyed by id. Relations are expressed as id sets and
//! id-to-count maps on each record, never as references between records.
//!
//! Operations that name an unknown user are silent no-ops. The `try_*`
//! variants report the same conditions as [`Error`] values instead.

use std::collections::HashMap;
use tracing::debug;

use super::user::User;
use crate::error::{Error, Result};

/// In-memory social graph
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    users: HashMap<String, User>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user under its id, replacing any previous record.
    pub fn add_user(&mut self, user: User) -> Option<User> {
        let replaced = self.users.insert(user.id().to_string(), user);
        if let Some(ref old) = replaced {
            debug!(user_id = old.id(), "Replaced existing user record");
        }
        replaced
    }

    /// Make `a` and `b` friends of each other.
    ///
    /// Returns whether the graph changed. Unknown ids and `a == b` leave the
    /// graph untouched.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> bool {
        if a == b || !self.users.contains_key(a) || !self.users.contains_key(b) {
            debug!(a, b, "Skipping friendship with unknown or identical users");
            return false;
        }

        let mut changed = false;
        if let Some(user) = self.users.get_mut(a) {
            changed |= user.insert_friend(b);
        }
        if let Some(user) = self.users.get_mut(b) {
            changed |= user.insert_friend(a);
        }
        changed
    }

    /// Count one visit by `visitor` to `visited`'s profile.
    ///
    /// Only the visitor's record changes. Returns whether a visit was recorded.
    pub fn record_visit(&mut self, visitor: &str, visited: &str) -> bool {
        self.record_visits(visitor, visited, 1)
    }

    /// Count `n` visits by `visitor` to `visited`'s profile in one step.
    ///
    /// The counter saturates at `u32::MAX`. `n == 0` records nothing.
    pub fn record_visits(&mut self, visitor: &str, visited: &str, n: u32) -> bool {
        if !self.users.contains_key(visited) {
            debug!(visitor, visited, "Skipping visit to unknown user");
            return false;
        }
        match self.users.get_mut(visitor) {
            Some(_) if n == 0 => false,
            Some(user) => {
                let count = user.add_visits(visited, n);
                debug!(visitor, visited, count, "Recorded profile visit");
                true
            }
            None => {
                debug!(visitor, visited, "Skipping visit from unknown user");
                false
            }
        }
    }

    pub fn try_add_friendship(&mut self, a: &str, b: &str) -> Result<()> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Err(Error::SelfFriendship { id: a.to_string() });
        }
        self.add_friendship(a, b);
        Ok(())
    }

    pub fn try_record_visit(&mut self, visitor: &str, visited: &str) -> Result<()> {
        self.require(visitor)?;
        self.require(visited)?;
        self.record_visit(visitor, visited);
        Ok(())
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Look up a user or fail with `NotFound`
    pub fn require(&self, id: &str) -> Result<&User> {
        self.users.get(id).ok_or_else(|| Error::not_found("user", id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All users, in arbitrary order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Ids of `id`'s direct friends, ordered; empty for unknown users
    pub fn friends_of(&self, id: &str) -> Vec<&str> {
        self.users
            .get(id)
            .map(|u| u.friends().iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn visit_count(&self, visitor: &str, visited: &str) -> u32 {
        self.users
            .get(visitor)
            .map(|u| u.visits_to(visited))
            .unwrap_or(0)
    }
}
