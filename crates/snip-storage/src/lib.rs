//! Key-value store backends for snip.

pub mod memory;
pub mod redis;

pub use memory::InMemoryStore;
pub use self::redis::RedisStore;
pub use snip_core::{KeyValueStore, ReadStore, StoreError};
