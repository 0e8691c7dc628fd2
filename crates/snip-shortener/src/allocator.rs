use crate::error::Result;
use async_trait::async_trait;
use jiff::Timestamp;
use snip_core::{ShortCode, ShortLink};

/// Parameters for allocating a short link.
#[derive(Debug, Clone)]
pub struct AllocateParams {
    /// The original URL to be shortened, stored exactly as given.
    pub original_url: String,
    /// Optional caller-chosen code. Reserved as-is or not at all.
    pub custom_code: Option<ShortCode>,
    /// Optional instant after which the link stops resolving.
    pub expires_at: Option<Timestamp>,
}

impl AllocateParams {
    /// Parameters for a never-expiring link with a generated code.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            custom_code: None,
            expires_at: None,
        }
    }

    pub fn with_custom_code(mut self, code: ShortCode) -> Self {
        self.custom_code = Some(code);
        self
    }

    pub fn with_expiration(mut self, expires_at: Timestamp) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

#[async_trait]
pub trait Allocator: Send + Sync + 'static {
    /// Creates and persists a short link, returning the stored record.
    async fn allocate(&self, params: AllocateParams) -> Result<ShortLink>;
}
