//! Recommendation Engine
//!
//! Ranks friends-of-friends for a user. Candidates are the users exactly two
//! friendship hops away, minus the user and their direct friends. Each one is
//! scored from friend-set overlap, mutual friends and visits in both
//! directions.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::metrics::{PerformanceTimer, SuggestionStats};
use super::similarity::{jaccard, mutual_count, round2};
use crate::config::RecommendationConfig;
use crate::error::{Error, Result};
use crate::graph::{SocialGraph, User};

/// A ranked friend suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub friend_id: String,
    pub jaccard_similarity: f64,
    pub mutual_friends_count: usize,
    pub visits_count: u32,
    pub combined_score: f64,
}

/// How suggestions are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    /// Combined weighted score, descending
    #[default]
    Weighted,
    /// Jaccard similarity descending, then visits descending
    Jaccard,
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingMode::Weighted => write!(f, "weighted"),
            RankingMode::Jaccard => write!(f, "jaccard"),
        }
    }
}

impl FromStr for RankingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "weighted" => Ok(RankingMode::Weighted),
            "jaccard" => Ok(RankingMode::Jaccard),
            other => Err(Error::invalid_format(format!(
                "unknown ranking mode '{}', expected 'weighted' or 'jaccard'",
                other
            ))),
        }
    }
}

/// Weights of the combined score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub jaccard: f64,
    pub mutual_friends: f64,
    pub visits: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            jaccard: 0.5,
            mutual_friends: 0.3,
            visits: 0.2,
        }
    }
}

/// Default candidate count at which scoring moves onto the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Default duration above which a query is logged as slow
pub const DEFAULT_SLOW_QUERY_MS: u64 = 50;

/// Friend-of-friend recommendation engine.
///
/// Holds only scoring settings; every call reads the graph it is given, so
/// results always reflect the latest mutations.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    weights: ScoringWeights,
    mode: RankingMode,
    max_suggestions: Option<usize>,
    parallel_threshold: usize,
    slow_query_ms: u64,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            mode: RankingMode::default(),
            max_suggestions: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            slow_query_ms: DEFAULT_SLOW_QUERY_MS,
        }
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RecommendationConfig) -> Self {
        Self {
            weights: config.weights,
            mode: config.ranking_mode,
            max_suggestions: config.max_suggestions,
            parallel_threshold: config.parallel_threshold,
            slow_query_ms: config.slow_query_ms,
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_mode(mut self, mode: RankingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Keep at most `limit` suggestions after ranking
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.max_suggestions = limit;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn mode(&self) -> RankingMode {
        self.mode
    }

    /// Ranked suggestions for `user_id`; empty when the user is unknown
    pub fn suggest_friends(&self, graph: &SocialGraph, user_id: &str) -> Vec<Suggestion> {
        self.suggest_with_stats(graph, user_id).0
    }

    /// Like [`suggest_friends`](Self::suggest_friends) but fails for an unknown user
    pub fn try_suggest_friends(&self, graph: &SocialGraph, user_id: &str) -> Result<Vec<Suggestion>> {
        graph.require(user_id)?;
        Ok(self.suggest_friends(graph, user_id))
    }

    pub fn suggest_with_stats(
        &self,
        graph: &SocialGraph,
        user_id: &str,
    ) -> (Vec<Suggestion>, SuggestionStats) {
        let timer = PerformanceTimer::new("suggest_friends");
        let mut stats = SuggestionStats {
            user_id: user_id.to_string(),
            ..Default::default()
        };

        let Some(seed) = graph.user(user_id) else {
            debug!(user_id, "No suggestions for unknown user");
            return (Vec::new(), stats);
        };

        let candidates: Vec<&User> = Self::two_hop_candidates(graph, seed)
            .into_iter()
            .filter_map(|id| graph.user(id))
            .collect();
        stats.candidates_considered = candidates.len();
        stats.parallel = candidates.len() >= self.parallel_threshold;

        let mut scored: Vec<Suggestion> = if stats.parallel {
            candidates
                .par_iter()
                .map(|candidate| self.score_candidate(seed, candidate))
                .collect()
        } else {
            candidates
                .iter()
                .map(|candidate| self.score_candidate(seed, candidate))
                .collect()
        };

        self.rank(&mut scored);
        if let Some(limit) = self.max_suggestions {
            scored.truncate(limit);
        }

        stats.suggestions_returned = scored.len();
        stats.duration_ms = timer.elapsed_ms();
        timer.log_if_slow(self.slow_query_ms);

        debug!(
            user_id,
            candidates = stats.candidates_considered,
            returned = stats.suggestions_returned,
            parallel = stats.parallel,
            mode = %self.mode,
            "Generated friend suggestions"
        );

        (scored, stats)
    }

    /// Ids exactly two hops from `seed`, excluding `seed` and its friends
    fn two_hop_candidates<'g>(graph: &'g SocialGraph, seed: &User) -> BTreeSet<&'g str> {
        let mut candidates = BTreeSet::new();
        for friend_id in seed.friends() {
            let Some(friend) = graph.user(friend_id) else {
                continue;
            };
            for fof in friend.friends() {
                if fof != seed.id() && !seed.is_friend_with(fof) {
                    candidates.insert(fof.as_str());
                }
            }
        }
        candidates
    }

    fn score_candidate(&self, seed: &User, candidate: &User) -> Suggestion {
        let jaccard_similarity = jaccard(seed.friends(), candidate.friends());
        let mutual_friends_count = mutual_count(seed.friends(), candidate.friends());
        let visits_count = seed
            .visits_to(candidate.id())
            .saturating_add(candidate.visits_to(seed.id()));

        let combined_score = round2(
            self.weights.jaccard * jaccard_similarity
                + self.weights.mutual_friends * mutual_friends_count as f64
                + self.weights.visits * visits_count as f64,
        );

        Suggestion {
            friend_id: candidate.id().to_string(),
            jaccard_similarity,
            mutual_friends_count,
            visits_count,
            combined_score,
        }
    }

    fn rank(&self, scored: &mut [Suggestion]) {
        match self.mode {
            RankingMode::Weighted => scored.sort_by(|a, b| {
                b.combined_score
                    .total_cmp(&a.combined_score)
                    .then_with(|| b.jaccard_similarity.total_cmp(&a.jaccard_similarity))
                    .then_with(|| b.visits_count.cmp(&a.visits_count))
                    .then_with(|| b.mutual_friends_count.cmp(&a.mutual_friends_count))
                    .then_with(|| a.friend_id.cmp(&b.friend_id))
            }),
            RankingMode::Jaccard => scored.sort_by(|a, b| {
                b.jaccard_similarity
                    .total_cmp(&a.jaccard_similarity)
                    .then_with(|| b.visits_count.cmp(&a.visits_count))
                    .then_with(|| b.mutual_friends_count.cmp(&a.mutual_friends_count))
                    .then_with(|| a.friend_id.cmp(&b.friend_id))
            }),
        }
    }
}
