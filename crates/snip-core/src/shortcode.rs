use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A short code identifying a stored [`ShortLink`](crate::ShortLink).
///
/// Every short code is non-empty and contains only `[a-zA-Z0-9_-]`.
/// Caller-chosen codes are further restricted by [`ShortCode::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

/// Shortest custom code a caller may reserve.
pub const MIN_CUSTOM_LENGTH: usize = 3;
/// Longest custom code a caller may reserve.
pub const MAX_CUSTOM_LENGTH: usize = 20;
/// Upper bound for any code, generated ones included.
pub const MAX_LENGTH: usize = 64;

/// Codes that would shadow a route of the HTTP boundary.
pub const RESERVED_CODES: &[&str] = &["api", "health"];

impl ShortCode {
    /// Creates a caller-chosen short code after validating it.
    ///
    /// Valid custom codes are 3-20 characters from `[a-zA-Z0-9_-]` and are
    /// not one of the [`RESERVED_CODES`].
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();

        if code.len() < MIN_CUSTOM_LENGTH || code.len() > MAX_CUSTOM_LENGTH {
            return Err(ValidationError::InvalidShortCode(format!(
                "length must be between {} and {}, got {}",
                MIN_CUSTOM_LENGTH,
                MAX_CUSTOM_LENGTH,
                code.len()
            )));
        }
        Self::check_charset(&code)?;

        if RESERVED_CODES.contains(&code.as_str()) {
            return Err(ValidationError::InvalidShortCode(format!(
                "'{}' is reserved",
                code
            )));
        }

        Ok(Self(code))
    }

    /// Parses any well-formed short code, generated or custom.
    ///
    /// Used for codes arriving on the read path and for codes found in
    /// stored records, where the custom length window does not apply.
    pub fn parse(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();

        if code.is_empty() || code.len() > MAX_LENGTH {
            return Err(ValidationError::InvalidShortCode(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                code.len()
            )));
        }
        Self::check_charset(&code)?;

        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators drawing from the alphanumeric alphabet).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn check_charset(code: &str) -> Result<(), ValidationError> {
        if !code.chars().all(is_code_char) {
            return Err(ValidationError::InvalidShortCode(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                code
            )));
        }
        Ok(())
    }
}

/// Returns `true` for characters allowed in a short code.
pub fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl TryFrom<String> for ShortCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
