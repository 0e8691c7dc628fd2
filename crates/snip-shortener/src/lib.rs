//! Write path of the snip URL shortener.
//!
//! This crate provides the [`Allocator`] contract and its store-backed
//! implementation, [`ShortenerService`], which turns an original URL into a
//! persisted [`ShortLink`](snip_core::ShortLink) under a unique short code.

pub mod allocator;
pub mod error;
pub mod service;

pub use allocator::{AllocateParams, Allocator};
pub use error::ShortenerError;
pub use service::{AllocatorSettings, ShortenerService};
