//! HTTP boundary of the snip URL shortener.
//!
//! [`App::router`] wires the write path, the redirect path and the
//! existence check onto one axum router.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
