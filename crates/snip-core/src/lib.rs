//! Core types and traits for the snip URL shortener.
//!
//! This crate provides the shared record type, the key-value store
//! contract and the request validation rules used by both the allocator
//! (write path) and the resolver (read path).

pub mod error;
pub mod link;
pub mod shortcode;
pub mod store;
pub mod validate;

pub use error::{StoreError, ValidationError};
pub use link::ShortLink;
pub use shortcode::ShortCode;
pub use store::{KeyValueStore, ReadStore};
