//! Read path of the snip URL shortener.
//!
//! This crate provides a [`RedirectorService`] that resolves short codes to
//! their original URLs. Expired links resolve like missing ones, while
//! [`Resolver::exists`] still reports every occupied code.
//!
//! # Example
//!
//! ```rust
//! use snip_core::ShortCode;
//! use snip_redirector::{RedirectorService, Resolution, Resolver};
//! use snip_storage::InMemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RedirectorService::new(InMemoryStore::new());
//!
//! let code = ShortCode::parse("abc123")?;
//! if let Resolution::Found(url) = service.resolve(&code).await? {
//!     println!("Redirect to: {}", url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod resolver;
pub mod service;

pub use error::{RedirectorError, Result};
pub use resolver::{Resolution, Resolver};
pub use service::RedirectorService;
