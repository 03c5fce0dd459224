//! Error types used throughout the gateway

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Kivu
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum KivuError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The ERP refused a delete because other records still reference the
    /// target. Kept as its own variant so callers can pattern-match instead
    /// of re-parsing error text.
    #[error("Referential restriction: {0}")]
    RestrictViolation(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Kivu operations
pub type Result<T> = std::result::Result<T, KivuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_tagged_representation() {
        let err = KivuError::Auth("bad credentials".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"Auth\""));
        assert!(json.contains("bad credentials"));
    }

    #[test]
    fn restrict_violation_is_distinguishable() {
        let err = KivuError::RestrictViolation("linked documents".to_string());
        assert!(matches!(err, KivuError::RestrictViolation(_)));
        assert!(err.to_string().contains("Referential restriction"));
    }
}
