use async_trait::async_trait;
use redis::AsyncCommands;
use snip_core::error::Result;
use snip_core::{KeyValueStore, ReadStore, StoreError};
use tracing::{debug, trace, warn};

/// Key prefix used when none is configured.
pub const DEFAULT_KEY_PREFIX: &str = "snip:link:";

/// A Redis-backed key-value store.
///
/// Values are written with plain `SET` and never carry a Redis TTL, so an
/// expired short link keeps occupying its key.
#[derive(Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    let lowered = message.to_ascii_lowercase();
    if lowered.contains("timed out") {
        StoreError::Timeout(message)
    } else if lowered.contains("connection refused")
        || lowered.contains("broken pipe")
        || lowered.contains("connection reset")
    {
        StoreError::Unavailable(message)
    } else {
        StoreError::Operation(message)
    }
}

impl RedisStore {
    /// Creates a new Redis store with the default key prefix.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self::with_prefix(conn, DEFAULT_KEY_PREFIX)
    }

    /// Creates a new Redis store with a custom key prefix.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    /// * `key_prefix` - Custom prefix for keys (e.g., "myapp:link:")
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Opens a multiplexed connection to `redis_url`.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| map_redis_error("invalid Redis url", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                let message = format!("failed to connect to Redis: {e}");
                StoreError::Unavailable(message)
            })?;
        Ok(Self::with_prefix(conn, key_prefix))
    }

    /// Returns the configured key prefix.
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    fn storage_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ReadStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let storage_key = self.storage_key(key);
        trace!(key, "Fetching value from Redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(&storage_key).await {
            Ok(value) => {
                trace!(key, found = value.is_some(), "Fetched value from Redis");
                Ok(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let storage_key = self.storage_key(key);
        trace!(key, "Checking existence in Redis");

        let mut conn = self.conn.clone();
        conn.exists::<_, bool>(&storage_key).await.map_err(|e| {
            warn!(key, error = %e, "Redis error on exists");
            map_redis_error("failed to check key in Redis", e)
        })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn put(&self, key: &str, value: String) -> Result<()> {
        let storage_key = self.storage_key(key);
        trace!(key, "Storing value in Redis");

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(&storage_key, value).await {
            Ok(()) => {
                debug!(key, "Stored value in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to store value in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }
}

