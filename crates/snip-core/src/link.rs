use crate::error::{StoreError, ValidationError};
use crate::shortcode::ShortCode;
use crate::validate;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A short link as persisted in the key-value store.
///
/// Records are stored as JSON objects with camelCase field names, keyed by
/// their short code. Once written a record is never modified; an expired
/// record stays in the store so that its code is never handed out again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShortLink {
    /// The code the record is stored under.
    pub short_code: ShortCode,
    /// The destination of the redirect.
    pub original_url: String,
    /// When the record was allocated.
    pub created_at: Timestamp,
    /// When the record stops resolving, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    /// Raw click counter. Records written without one read back as zero.
    #[serde(default)]
    pub clicks: u64,
}

impl ShortLink {
    /// Builds a fresh record with a zeroed click counter.
    ///
    /// Fails if `expires_at` is not strictly after `created_at`.
    pub fn new(
        short_code: ShortCode,
        original_url: impl Into<String>,
        created_at: Timestamp,
        expires_at: Option<Timestamp>,
    ) -> Result<Self, ValidationError> {
        if let Some(expires_at) = expires_at {
            validate::expiration_after(created_at, expires_at)?;
        }

        Ok(Self {
            short_code,
            original_url: original_url.into(),
            created_at,
            expires_at,
            clicks: 0,
        })
    }

    /// Returns `true` if the record expired strictly before `now`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    /// Returns `true` if the record has expired as of the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Timestamp::now())
    }

    /// Serializes the record into the stored JSON form.
    pub fn encode(&self) -> Result<String, StoreError> {
        serde_json::to_string(self)
            .map_err(|e| StoreError::Operation(format!("failed to serialize short link: {e}")))
    }

    /// Strictly decodes a stored record found under `key`.
    ///
    /// Any shape mismatch, or a record violating the [`ShortLink`]
    /// invariants, is reported as [`StoreError::InvalidData`].
    pub fn decode(key: &ShortCode, raw: &str) -> Result<Self, StoreError> {
        let link: ShortLink = serde_json::from_str(raw).map_err(|e| {
            StoreError::InvalidData(format!("malformed record under '{key}': {e}"))
        })?;

        if link.short_code != *key {
            return Err(StoreError::InvalidData(format!(
                "record under '{key}' carries short code '{}'",
                link.short_code
            )));
        }

        // Records may predate the write-side rules, only require a usable URL.
        validate::absolute_url(&link.original_url).map_err(|e| {
            StoreError::InvalidData(format!("record under '{key}' has {e}"))
        })?;

        if let Some(expires_at) = link.expires_at {
            validate::expiration_after(link.created_at, expires_at).map_err(|e| {
                StoreError::InvalidData(format!("record under '{key}' has {e}"))
            })?;
        }

        Ok(link)
    }
}
