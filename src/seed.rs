//! Graph seeding
//!
//! Builds a [`SocialGraph`] from a TOML or JSON description, or from the
//! built-in sample cast. Friendships and visits naming unknown users are
//! skipped with a warning, the same way the store ignores them.
//!
//! ```toml
//! users = [
//!     { id = "alice", name = "Alice" },
//!     { id = "bob", name = "Bob" },
//! ]
//! friendships = [["alice", "bob"]]
//! visits = [{ visitor = "alice", visited = "bob", count = 2 }]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::graph::{SocialGraph, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSeed {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub friendships: Vec<(String, String)>,
    #[serde(default)]
    pub visits: Vec<SeedVisit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedUser {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedVisit {
    pub visitor: String,
    pub visited: String,
    #[serde(default = "default_visit_count")]
    pub count: u32,
}

fn default_visit_count() -> u32 {
    1
}

impl GraphSeed {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read a seed file; `.json` files are parsed as JSON, anything else as TOML
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Apply users, then friendships, then visits to a fresh graph
    pub fn into_graph(self) -> SocialGraph {
        let mut graph = SocialGraph::new();

        for user in self.users {
            if let Some(old) = graph.add_user(User::new(user.id, user.name)) {
                warn!(
                    user_id = old.id(),
                    "Duplicate user id in seed, keeping the last entry"
                );
            }
        }

        let mut skipped_friendships = 0usize;
        for (a, b) in &self.friendships {
            if !graph.contains(a) || !graph.contains(b) || a == b {
                warn!(a = a.as_str(), b = b.as_str(), "Skipping invalid friendship in seed");
                skipped_friendships += 1;
                continue;
            }
            graph.add_friendship(a, b);
        }

        let mut skipped_visits = 0usize;
        for visit in self.visits.iter().filter(|v| v.count > 0) {
            if !graph.record_visits(&visit.visitor, &visit.visited, visit.count) {
                warn!(
                    visitor = visit.visitor.as_str(),
                    visited = visit.visited.as_str(),
                    "Skipping visit with unknown user in seed"
                );
                skipped_visits += 1;
            }
        }

        info!(
            users = graph.len(),
            friendships = self.friendships.len() - skipped_friendships,
            skipped_friendships,
            skipped_visits,
            "Seeded social graph"
        );
        graph
    }
}

/// Load a graph from `path`
pub fn load_graph(path: impl AsRef<Path>) -> Result<SocialGraph> {
    Ok(GraphSeed::from_path(path)?.into_graph())
}

/// The built-in sample cast.
///
/// Alice's circle with two friends-of-friends (Eve and Diego), plus a star
/// around Pedro whose leaves only know each other through him.
pub fn sample_seed() -> GraphSeed {
    let users = [
        "Alice", "Bob", "Charlie", "David", "Eve", "Diego", "Pedro", "Pablo", "Pau", "Aldo",
    ]
    .into_iter()
    .map(|name| SeedUser {
        id: name.to_string(),
        name: name.to_string(),
    })
    .collect();

    let friendships = [
        ("Alice", "Bob"),
        ("Bob", "Charlie"),
        ("Alice", "Charlie"),
        ("Alice", "David"),
        ("David", "Eve"),
        ("Eve", "Bob"),
        ("Eve", "Charlie"),
        ("Bob", "Diego"),
        ("Diego", "David"),
        ("Pedro", "Pablo"),
        ("Pedro", "Pau"),
        ("Pedro", "Aldo"),
    ]
    .into_iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();

    let visits = [
        ("Alice", "Bob"),
        ("Alice", "Charlie"),
        ("Bob", "Alice"),
        ("Eve", "Alice"),
        ("Alice", "Diego"),
        ("Alice", "Eve"),
        ("Diego", "Alice"),
    ]
    .into_iter()
    .map(|(visitor, visited)| SeedVisit {
        visitor: visitor.to_string(),
        visited: visited.to_string(),
        count: 1,
    })
    .collect();

    GraphSeed {
        users,
        friendships,
        visits,
    }
}

pub fn sample_graph() -> SocialGraph {
    sample_seed().into_graph()
}
