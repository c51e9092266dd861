//! Error types for the FriendGraph engine
//!
//! The graph store and recommendation engine absorb unknown ids silently.
//! This enum backs the strict `try_*` variants, configuration loading and
//! graph seed files:
//! - `thiserror` for the error definitions
//! - Stable error codes for machine-readable output
//! - Source chaining for I/O and parse failures

use std::borrow::Cow;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for FriendGraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the FriendGraph engine
#[derive(Debug, Error)]
pub enum Error {
    // ========================================================================
    // Graph Errors
    // ========================================================================
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("User {id} cannot befriend themselves")]
    SelfFriendship { id: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfig {
        key: &'static str,
        message: Cow<'static, str>,
    },

    // ========================================================================
    // Seed File Errors
    // ========================================================================
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid data format: {message}")]
    InvalidFormat { message: Cow<'static, str> },
}

impl Error {
    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an I/O error bound to the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error reports an unknown entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Get error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NOT_FOUND",
            Error::SelfFriendship { .. } => "SELF_FRIENDSHIP",
            Error::InvalidConfig { .. } => "CONFIG_ERROR",
            Error::Io { .. } => "IO_ERROR",
            Error::Json(_) | Error::TomlParse(_) | Error::InvalidFormat { .. } => {
                "SERIALIZATION_ERROR"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = Error::not_found("user", "ghost");
        assert!(err.is_not_found());
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "Entity not found: user with id ghost");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::SelfFriendship {
                id: "alice".to_string()
            }
            .error_code(),
            "SELF_FRIENDSHIP"
        );
        assert_eq!(
            Error::InvalidConfig {
                key: "REC_WEIGHT_JACCARD",
                message: "negative".into()
            }
            .error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::invalid_format("bad").error_code(),
            "SERIALIZATION_ERROR"
        );
        assert!(!Error::invalid_format("bad").is_not_found());
    }

    #[test]
    fn test_library_errors_convert_into_anyhow() {
        let err: anyhow::Error = Error::not_found("user", "ghost").into();
        let inner = err.downcast_ref::<Error>().unwrap();
        assert_eq!(inner.error_code(), "NOT_FOUND");
    }
}
