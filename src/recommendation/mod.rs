//! Recommendation Module
//!
//! Suggests new friends for a user from the people their friends know.
//!
//! ## Architecture
//!
//! 1. **Similarity** - Jaccard overlap and mutual-friend counts over friend sets
//! 2. **Engine** - Two-hop candidate discovery, scoring and ranking
//! 3. **Metrics** - Per-query stats and slow-query logging
//!
//! ## Algorithm Overview
//!
//! Each friend-of-friend is scored with a weighted sum:
//! - Jaccard similarity of friend sets (50%)
//! - Mutual friends count (30%)
//! - Profile visits in both directions (20%)
//!
//! Similarity and the combined score are rounded to two decimals.

pub mod engine;
pub mod metrics;
pub mod similarity;

pub use engine::{RankingMode, RecommendationEngine, ScoringWeights, Suggestion};
pub use metrics::SuggestionStats;
