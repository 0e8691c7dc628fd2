use crate::resolver::{Resolution, Resolver};
use crate::Result;
use async_trait::async_trait;
use jiff::Timestamp;
use snip_core::{ReadStore, ShortCode, ShortLink};
use tracing::{debug, trace};

/// Service for handling URL redirects.
///
/// Uses a read-only store to fetch records and handles expiration checks.
/// It never writes, so resolving is idempotent and safe to run concurrently.
#[derive(Debug, Clone)]
pub struct RedirectorService<S> {
    store: S,
}

impl<S: ReadStore> RedirectorService<S> {
    /// Creates a new RedirectorService over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetches and strictly decodes the record stored under `code`.
    async fn fetch(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        let Some(raw) = self.store.get(code.as_str()).await? else {
            return Ok(None);
        };
        Ok(Some(ShortLink::decode(code, &raw)?))
    }
}

#[async_trait]
impl<S: ReadStore> Resolver for RedirectorService<S> {
    async fn resolve(&self, code: &ShortCode) -> Result<Resolution> {
        trace!(code = %code, "resolving short code");

        let Some(link) = self.fetch(code).await? else {
            trace!(code = %code, "Short code not found");
            return Ok(Resolution::NotFound);
        };

        if link.is_expired_at(Timestamp::now()) {
            debug!(code = %code, expires_at = ?link.expires_at, "Record has expired");
            return Ok(Resolution::Expired);
        }

        debug!(code = %code, url = %link.original_url, "Resolved short code");
        Ok(Resolution::Found(link.original_url))
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        Ok(self.fetch(code).await?.filter(|link| !link.is_expired()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.store.exists(code.as_str()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RedirectorError;
    use jiff::SignedDuration;
    use snip_core::{KeyValueStore, StoreError};
    use snip_storage::InMemoryStore;
    use snip_test_infra::CountingStore;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn record(c: &str, url: &str, expires_at: Option<Timestamp>) -> ShortLink {
        let created_at = Timestamp::now() - SignedDuration::from_hours(2);
        ShortLink::new(code(c), url, created_at, expires_at).unwrap()
    }

    async fn setup_with_record(link: ShortLink) -> RedirectorService<CountingStore<InMemoryStore>> {
        let store = CountingStore::new(InMemoryStore::new());
        store
            .inner()
            .put(link.short_code.as_str(), link.encode().unwrap())
            .await
            .unwrap();
        RedirectorService::new(store)
    }

    async fn setup_with_raw(c: &str, raw: &str) -> RedirectorService<InMemoryStore> {
        let store = InMemoryStore::new();
        store.put(c, raw.to_string()).await.unwrap();
        RedirectorService::new(store)
    }

    #[tokio::test]
    async fn resolve_existing_code() {
        let service = setup_with_record(record("abc123", "https://example.com", None)).await;

        let result = service.resolve(&code("abc123")).await.unwrap();
        assert_eq!(result, Resolution::Found("https://example.com".to_string()));
    }

    #[tokio::test]
    async fn resolve_nonexistent_code() {
        let service = RedirectorService::new(InMemoryStore::new());

        let result = service.resolve(&code("nope")).await.unwrap();
        assert_eq!(result, Resolution::NotFound);
        assert_eq!(result.into_url(), None);
    }

    #[tokio::test]
    async fn resolve_expired_code() {
        let expired = Timestamp::now() - SignedDuration::from_secs(1);
        let service =
            setup_with_record(record("expired", "https://example.com", Some(expired))).await;

        let result = service.resolve(&code("expired")).await.unwrap();
        assert_eq!(result, Resolution::Expired);
        assert_eq!(result.into_url(), None);
    }

    #[tokio::test]
    async fn resolve_not_yet_expired() {
        let future = Timestamp::now() + SignedDuration::from_hours(1);
        let service = setup_with_record(record("valid", "https://example.com", Some(future))).await;

        let result = service.resolve(&code("valid")).await.unwrap();
        assert_eq!(result.into_url().as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn expired_code_still_exists() {
        let expired = Timestamp::now() - SignedDuration::from_secs(1);
        let service =
            setup_with_record(record("expired", "https://example.com", Some(expired))).await;

        assert!(service.exists(&code("expired")).await.unwrap());
        assert!(!service.exists(&code("nosuchcode")).await.unwrap());
    }

    #[tokio::test]
    async fn repeated_resolve_is_stable_and_read_only() {
        let service = setup_with_record(record("abc123", "https://example.com", None)).await;

        for _ in 0..5 {
            let result = service.resolve(&code("abc123")).await.unwrap();
            assert_eq!(result, Resolution::Found("https://example.com".to_string()));
        }

        assert_eq!(service.store().gets(), 5);
        assert_eq!(service.store().puts(), 0);
    }

    #[tokio::test]
    async fn lookup_returns_full_record() {
        let link = record("abc123", "https://example.com", None);
        let service = setup_with_record(link.clone()).await;

        let found = service.lookup(&code("abc123")).await.unwrap();
        assert_eq!(found, Some(link));
    }

    #[tokio::test]
    async fn lookup_hides_expired_record() {
        let expired = Timestamp::now() - SignedDuration::from_secs(1);
        let service =
            setup_with_record(record("expired", "https://example.com", Some(expired))).await;

        assert_eq!(service.lookup(&code("expired")).await.unwrap(), None);
        assert_eq!(service.lookup(&code("missing")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_record_fails_closed() {
        let service = setup_with_raw("abc123", r#"{"originalUrl":"https://example.com"}"#).await;

        let err = service.resolve(&code("abc123")).await.unwrap_err();
        assert!(matches!(
            err,
            RedirectorError::Storage(StoreError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn record_under_wrong_key_fails_closed() {
        let link = record("other1", "https://example.com", None);
        let service = setup_with_raw("abc123", &link.encode().unwrap()).await;

        let err = service.lookup(&code("abc123")).await.unwrap_err();
        assert!(matches!(
            err,
            RedirectorError::Storage(StoreError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn legacy_record_without_clicks_resolves() {
        let service = setup_with_raw(
            "abc123",
            r#"{"shortCode":"abc123","originalUrl":"https://example.com","createdAt":"2025-01-01T00:00:00.000Z"}"#,
        )
        .await;

        let result = service.resolve(&code("abc123")).await.unwrap();
        assert_eq!(result, Resolution::Found("https://example.com".to_string()));
    }
}
