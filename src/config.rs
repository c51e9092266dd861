//! Configuration management for the FriendGraph engine
//!
//! Strongly-typed configuration read from environment variables (and a
//! `.env` file when present), validated before use.
//!
//! # Example
//! ```no_run
//! use friendgraph::Config;
//! let config = Config::from_env().expect("failed to load config");
//! println!("Ranking mode: {}", config.recommendation.ranking_mode);
//! ```

use crate::error::{Error, Result};
use crate::recommendation::engine::{
    RankingMode, ScoringWeights, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_SLOW_QUERY_MS,
};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Main application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Recommendation engine configuration
    pub recommendation: RecommendationConfig,
    /// Log output configuration
    pub logging: LoggingConfig,
    /// Where the initial graph comes from
    pub seed: SeedConfig,
}

/// Recommendation engine configuration
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// Combined score weights
    pub weights: ScoringWeights,
    /// Ordering of suggestions
    pub ranking_mode: RankingMode,
    /// Maximum suggestions returned per query (unbounded when `None`)
    pub max_suggestions: Option<usize>,
    /// Candidate count at which scoring runs in parallel
    pub parallel_threshold: usize,
    /// Queries slower than this are logged at warn level
    pub slow_query_ms: u64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            ranking_mode: RankingMode::default(),
            max_suggestions: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            slow_query_ms: DEFAULT_SLOW_QUERY_MS,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::invalid_format(format!("unknown log format '{}'", other))),
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,
    /// Colored output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            default_filter: DEFAULT_LOG_FILTER.to_string(),
            ansi: true,
        }
    }
}

/// Initial graph source
#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
    /// TOML or JSON graph file; the sample cast is used when unset
    pub graph_file: Option<PathBuf>,
}

pub const DEFAULT_LOG_FILTER: &str = "friendgraph=info,warn";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore if not found)
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvSource { lookup: &lookup };

        let config = Self {
            recommendation: RecommendationConfig::from_source(&env)?,
            logging: LoggingConfig::from_source(&env)?,
            seed: SeedConfig {
                graph_file: env.get("GRAPH_SEED_FILE").map(PathBuf::from),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        let weights = &self.recommendation.weights;
        for (key, value) in [
            ("REC_WEIGHT_JACCARD", weights.jaccard),
            ("REC_WEIGHT_MUTUAL", weights.mutual_friends),
            ("REC_WEIGHT_VISITS", weights.visits),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig {
                    key,
                    message: format!("weight must be a non-negative number, got {}", value).into(),
                });
            }
        }

        if self.recommendation.parallel_threshold == 0 {
            return Err(Error::InvalidConfig {
                key: "REC_PARALLEL_THRESHOLD",
                message: "parallel threshold must be at least 1".into(),
            });
        }

        if self.recommendation.max_suggestions == Some(0) {
            return Err(Error::InvalidConfig {
                key: "REC_MAX_SUGGESTIONS",
                message: "use an empty value for no limit instead of 0".into(),
            });
        }

        Ok(())
    }

    /// Log configuration summary
    pub fn log_summary(&self) {
        let rec = &self.recommendation;
        info!("Configuration loaded:");
        info!("  Recommendation:");
        info!(
            "    Weights: jaccard={} mutual={} visits={}",
            rec.weights.jaccard, rec.weights.mutual_friends, rec.weights.visits
        );
        info!("    Ranking mode: {}", rec.ranking_mode);
        match rec.max_suggestions {
            Some(limit) => info!("    Max suggestions: {}", limit),
            None => info!("    Max suggestions: unlimited"),
        }
        info!("    Parallel threshold: {}", rec.parallel_threshold);
        info!("  Seed:");
        match &self.seed.graph_file {
            Some(path) => info!("    Graph file: {}", path.display()),
            None => info!("    Graph file: <sample cast>"),
        }
    }
}

impl RecommendationConfig {
    fn from_source(env: &EnvSource<'_>) -> Result<Self> {
        let defaults = ScoringWeights::default();
        Ok(Self {
            weights: ScoringWeights {
                jaccard: env.parsed_or("REC_WEIGHT_JACCARD", defaults.jaccard)?,
                mutual_friends: env.parsed_or("REC_WEIGHT_MUTUAL", defaults.mutual_friends)?,
                visits: env.parsed_or("REC_WEIGHT_VISITS", defaults.visits)?,
            },
            ranking_mode: env.parsed_or("REC_RANKING_MODE", RankingMode::default())?,
            max_suggestions: env.parsed_opt("REC_MAX_SUGGESTIONS")?,
            parallel_threshold: env.parsed_or("REC_PARALLEL_THRESHOLD", DEFAULT_PARALLEL_THRESHOLD)?,
            slow_query_ms: env.parsed_or("REC_SLOW_QUERY_MS", DEFAULT_SLOW_QUERY_MS)?,
        })
    }
}

impl LoggingConfig {
    fn from_source(env: &EnvSource<'_>) -> Result<Self> {
        Ok(Self {
            format: env.parsed_or("LOG_FORMAT", LogFormat::default())?,
            default_filter: env
                .get("LOG_FILTER")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            ansi: env.get("NO_COLOR").is_none(),
        })
    }
}

// ============================================================================
// Helper functions
// ============================================================================

struct EnvSource<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
}

impl EnvSource<'_> {
    /// Non-empty value for `key`
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse `key` if set, otherwise `None`
    fn parsed_opt<T>(&self, key: &'static str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|e: T::Err| Error::InvalidConfig {
                    key,
                    message: format!("Invalid value '{}': {}", value, e).into(),
                }),
            None => Ok(None),
        }
    }

    /// Parse `key` if set, otherwise `default`
    fn parsed_or<T>(&self, key: &'static str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        Ok(self.parsed_opt(key)?.unwrap_or(default))
    }
}
