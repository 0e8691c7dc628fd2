//! Shared fixtures for snip tests.

pub mod counting;
pub mod error;
pub mod redis;

pub use counting::CountingStore;
pub use error::{Result, TestInfraError};
