use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A read-only view of a key-value store.
///
/// This trait provides only the read operations from [`KeyValueStore`],
/// allowing services like the resolver to have read-only access.
#[async_trait]
pub trait ReadStore: Send + Sync + 'static {
    /// Retrieves the raw value stored under `key`.
    /// Returns `None` if the key is not present.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Checks whether a value is stored under `key`.
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

/// A durable mapping from keys to opaque string values.
///
/// The contract is deliberately small: there is no TTL, no conditional
/// write and no transaction. A `put` to an occupied key overwrites it.
#[async_trait]
pub trait KeyValueStore: ReadStore {
    /// Stores `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: String) -> Result<()>;
}

#[async_trait]
impl<T: ReadStore> ReadStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        (**self).exists(key).await
    }
}

#[async_trait]
impl<T: KeyValueStore> KeyValueStore for Arc<T> {
    async fn put(&self, key: &str, value: String) -> Result<()> {
        (**self).put(key, value).await
    }
}
