use thiserror::Error;

/// Result type for key-value store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures of the key-value store, or of the data it hands back.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Malformed caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("invalid expiration: {0}")]
    InvalidExpiration(String),
}
