use crate::allocator::{AllocateParams, Allocator};
use crate::error::{Result, ShortenerError};
use async_trait::async_trait;
use jiff::Timestamp;
use snip_core::{validate, KeyValueStore, ShortCode, ShortLink};
use snip_generator::Generator;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

/// Number of candidates drawn before giving up, unless configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Settings for a [`ShortenerService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct AllocatorSettings {
    /// Upper bound on generated candidates per allocation. Clamped to at least one.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The store-backed [`Allocator`].
///
/// This service wraps a [`KeyValueStore`] and a [`Generator`] to handle:
/// - custom code reservation, failing on any occupied key
/// - generated codes, drawing again on collision up to a fixed budget
/// - expiration checks against the record's creation time
///
/// Uniqueness is best-effort. The store offers no insert-if-absent, so two
/// allocations racing for the same code can both pass the existence check
/// and the later `put` wins.
#[derive(Debug)]
pub struct ShortenerService<S, G> {
    store: S,
    generator: G,
    max_attempts: u32,
}

impl<S: KeyValueStore, G: Generator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(store: S, generator: G) -> Self {
        Self::with_settings(store, generator, AllocatorSettings::default())
    }

    pub fn with_settings(store: S, generator: G, settings: AllocatorSettings) -> Self {
        Self {
            store,
            generator,
            max_attempts: settings.max_attempts.max(1),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reserves a caller-chosen code. Any stored record occupies its key,
    /// expired or not.
    async fn reserve_custom(&self, code: ShortCode) -> Result<ShortCode> {
        let code = validate::custom_code(code.as_str())?;

        if self.store.exists(code.as_str()).await? {
            debug!(code = %code, "custom code already occupied");
            return Err(ShortenerError::CodeConflict(code.to_string()));
        }

        Ok(code)
    }

    /// Draws candidates until one is free or the attempt budget runs out.
    async fn generate_free(&self) -> Result<ShortCode> {
        for attempt in 1..=self.max_attempts {
            let candidate: ShortCode = self.generator.generate().into();

            if !self.store.exists(candidate.as_str()).await? {
                return Ok(candidate);
            }
            debug!(code = %candidate, attempt, "generated code collides, drawing again");
        }

        warn!(attempts = self.max_attempts, "short code space exhausted");
        Err(ShortenerError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[async_trait]
impl<S: KeyValueStore, G: Generator> Allocator for ShortenerService<S, G> {
    async fn allocate(&self, params: AllocateParams) -> Result<ShortLink> {
        validate::original_url(&params.original_url)?;

        let created_at = Timestamp::now();
        if let Some(expires_at) = params.expires_at {
            validate::expiration_after(created_at, expires_at)?;
        }

        let short_code = match params.custom_code {
            Some(code) => self.reserve_custom(code).await?,
            None => self.generate_free().await?,
        };

        let link = ShortLink::new(
            short_code,
            params.original_url,
            created_at,
            params.expires_at,
        )?;

        self.store
            .put(link.short_code.as_str(), link.encode()?)
            .await?;

        info!(
            code = %link.short_code,
            url = %link.original_url,
            expires_at = ?link.expires_at,
            "allocated short link"
        );
        Ok(link)
    }
}
