use snip_core::{StoreError, ValidationError};
use thiserror::Error;

/// Result type for allocation.
pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("short code already in use: {0}")]
    CodeConflict(String),
    #[error("no free short code found after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },
    #[error(transparent)]
    Storage(#[from] StoreError),
}
