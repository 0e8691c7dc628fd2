use snip_core::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RedirectorError>;

#[derive(Debug, Clone, Error)]
pub enum RedirectorError {
    #[error("storage operation failed: {0}")]
    Storage(
        #[from]
        #[source]
        StoreError,
    ),
}
