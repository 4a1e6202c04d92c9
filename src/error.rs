//! Error types for governance hashing and its command-line surface.

use thiserror::Error;

/// Errors raised while hashing or verifying governed resources.
///
/// Every variant describes malformed input. The hasher never falls back to a
/// default digest: either a valid root is produced or one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("At least one resource is required to compute a governance hash")]
    EmptyResources,

    #[error(
        "Invalid resource_type: {0:?}. Must match pattern ^[a-z][a-z0-9]*(-[a-z0-9]+)*$ \
         (e.g. 'policy', 'prompt', 'tool', 'lineage', 'context', 'memory', 'model')"
    )]
    InvalidResourceType(String),

    #[error("Invalid resource_name: {0:?} (must not contain ':')")]
    InvalidResourceName(String),

    #[error("Invalid content for resource {resource_name:?}: {reason}")]
    InvalidContent {
        resource_name: String,
        reason: String,
    },

    #[error("content_ref is required when hash_mode is 'pointer' (resource {0:?})")]
    MissingContentRef(String),

    #[error("Invalid hash: {0:?} (expected 64 lowercase hex characters)")]
    InvalidHash(String),

    #[error("Malformed Merkle tree: {0}")]
    MalformedTree(String),

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Errors surfaced by configuration, logging and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Hash error: {0}")]
    Hash(#[from] HashError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
