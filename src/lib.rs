//! FriendGraph library crate
//!
//! An in-memory social graph and a friend-of-friend recommendation engine.

pub mod config;
pub mod error;
pub mod graph;
pub mod recommendation;
pub mod seed;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use graph::{SharedGraph, SocialGraph, User};
pub use recommendation::{RankingMode, RecommendationEngine, ScoringWeights, Suggestion};
