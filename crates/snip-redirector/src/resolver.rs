use crate::Result;
use async_trait::async_trait;
use snip_core::{ShortCode, ShortLink};

/// Outcome of resolving a short code.
///
/// `NotFound` and `Expired` are kept apart for logging; callers facing the
/// outside world must treat them the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The code resolves to this original URL.
    Found(String),
    /// Nothing is stored under the code.
    NotFound,
    /// A record exists but its expiration has passed.
    Expired,
}

impl Resolution {
    /// Returns the destination, or `None` for a missing or expired code.
    pub fn into_url(self) -> Option<String> {
        match self {
            Resolution::Found(url) => Some(url),
            Resolution::NotFound | Resolution::Expired => None,
        }
    }
}

#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Resolves a short code to its original URL.
    async fn resolve(&self, code: &ShortCode) -> Result<Resolution>;

    /// Returns the full record behind a resolvable code.
    /// Returns `None` if the code does not exist or has expired.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<ShortLink>>;

    /// Checks whether a record occupies the code, regardless of expiration.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}
