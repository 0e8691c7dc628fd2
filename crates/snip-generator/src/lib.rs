pub mod random;

pub use random::{generate_candidate, GeneratorError, GeneratorSettings, RandomGenerator};

use snip_core::ShortCode;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// A candidate is not guaranteed to be free; the allocator checks the
/// store and draws again on collision.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Draws the next candidate code.
    fn generate(&self) -> Self::Output;
}
