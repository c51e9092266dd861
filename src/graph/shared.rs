//! Thread-safe handle to a [`SocialGraph`].
//!
//! A single readers-writer lock guards the whole graph, so a friendship
//! insert updates both endpoints before any reader can observe either.

use parking_lot::RwLock;
use std::sync::Arc;

use super::store::SocialGraph;
use super::user::User;
use crate::recommendation::{RecommendationEngine, Suggestion};

#[derive(Debug, Default, Clone)]
pub struct SharedGraph {
    inner: Arc<RwLock<SocialGraph>>,
}

impl SharedGraph {
    pub fn new(graph: SocialGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn add_user(&self, user: User) -> Option<User> {
        self.inner.write().add_user(user)
    }

    pub fn add_friendship(&self, a: &str, b: &str) -> bool {
        self.inner.write().add_friendship(a, b)
    }

    pub fn record_visit(&self, visitor: &str, visited: &str) -> bool {
        self.inner.write().record_visit(visitor, visited)
    }

    pub fn record_visits(&self, visitor: &str, visited: &str, n: u32) -> bool {
        self.inner.write().record_visits(visitor, visited, n)
    }

    /// Rank suggestions against the graph as of this call
    pub fn suggest_friends(&self, engine: &RecommendationEngine, user_id: &str) -> Vec<Suggestion> {
        let graph = self.inner.read();
        engine.suggest_friends(&graph, user_id)
    }

    /// Run `f` with shared read access
    pub fn read<R>(&self, f: impl FnOnce(&SocialGraph) -> R) -> R {
        f(&self.inner.read())
    }

    /// Clone of the current graph state
    pub fn snapshot(&self) -> SocialGraph {
        self.inner.read().clone()
    }
}

impl From<SocialGraph> for SharedGraph {
    fn from(graph: SocialGraph) -> Self {
        Self::new(graph)
    }
}
