use async_trait::async_trait;
use dashmap::DashMap;
use snip_core::error::Result;
use snip_core::{KeyValueStore, ReadStore};

/// In-memory implementation of the key-value store using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking.
///
/// Values are kept exactly as written. Like the production backend this
/// store knows nothing about expiration.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    storage: DashMap<String, String>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get(key).map(|value| value.clone()))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.storage.contains_key(key))
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn put(&self, key: &str, value: String) -> Result<()> {
        self.storage.insert(key.to_owned(), value);
        Ok(())
    }
}
