//! Request validation rules shared by the write path and the record codec.

use crate::error::ValidationError;
use crate::shortcode::ShortCode;
use jiff::Timestamp;
use url::Url;

/// Longest original URL accepted.
pub const MAX_URL_LENGTH: usize = 2048;

/// Validates that `raw` is an absolute `http` or `https` URL with a host.
pub fn original_url(raw: &str) -> Result<Url, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::InvalidUrl(
            "URL cannot be empty".to_string(),
        ));
    }

    if raw.len() > MAX_URL_LENGTH {
        return Err(ValidationError::InvalidUrl(format!(
            "URL must be at most {} bytes, got {}",
            MAX_URL_LENGTH,
            raw.len()
        )));
    }

    let url = absolute_url(raw)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ValidationError::InvalidUrl(format!(
            "URL scheme must be http or https: {}",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => {
            return Err(ValidationError::InvalidUrl(format!(
                "URL must have a host: {raw}"
            )))
        }
    }

    Ok(url)
}

/// Parses `raw` as an absolute URL of any scheme.
///
/// Control characters are refused outright: `Url::parse` silently drops
/// tabs and newlines, but the raw string is what ends up in the
/// `Location` header.
pub fn absolute_url(raw: &str) -> Result<Url, ValidationError> {
    if let Some(c) = raw.chars().find(|c| c.is_control()) {
        return Err(ValidationError::InvalidUrl(format!(
            "URL contains control character {:?}",
            c
        )));
    }

    Url::parse(raw).map_err(|e| ValidationError::InvalidUrl(format!("{raw}: {e}")))
}

/// Validates a caller-chosen code, see [`ShortCode::new`].
///
/// Stricter than the bare `[A-Za-z0-9_-]{3,20}` pattern: the
/// [`RESERVED_CODES`](crate::shortcode::RESERVED_CODES) are refused too,
/// since they would shadow the gateway's own routes.
pub fn custom_code(raw: &str) -> Result<ShortCode, ValidationError> {
    ShortCode::new(raw)
}

/// Parses an RFC 3339 timestamp and requires it to lie strictly after `now`.
pub fn expires_at(raw: &str, now: Timestamp) -> Result<Timestamp, ValidationError> {
    let expires_at: Timestamp = raw.parse().map_err(|e| {
        ValidationError::InvalidExpiration(format!("'{raw}' is not an ISO-8601 timestamp: {e}"))
    })?;
    expiration_after(now, expires_at)?;
    Ok(expires_at)
}

/// Requires `expires_at` to lie strictly after `created_at`.
pub fn expiration_after(
    created_at: Timestamp,
    expires_at: Timestamp,
) -> Result<(), ValidationError> {
    if expires_at <= created_at {
        return Err(ValidationError::InvalidExpiration(format!(
            "{expires_at} is not after {created_at}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    #[test]
    fn accepts_http_and_https() {
        assert!(original_url("https://example.com").is_ok());
        assert!(original_url("http://example.com/very/long/path?q=1#frag").is_ok());
        assert!(original_url("https://127.0.0.1:8080/").is_ok());
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(original_url("").is_err());
        assert!(original_url("not-a-valid-url").is_err());
        assert!(original_url("/relative/path").is_err());
        assert!(original_url("ftp://example.com").is_err());
        assert!(original_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn rejects_control_characters() {
        for raw in [
            "https://example.com/a\nb",
            "https://example.com/a\rb",
            "https://example.com/a\tb",
            "https://example.com/\u{7f}",
            "\nhttps://example.com",
        ] {
            let err = original_url(raw).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidUrl(_)), "accepted: {raw:?}");
        }
    }

    #[test]
    fn absolute_url_allows_any_scheme() {
        assert!(absolute_url("ftp://example.com/file").is_ok());
        assert!(absolute_url("mailto:someone@example.com").is_ok());
        assert!(absolute_url("example.com").is_err());
        assert!(absolute_url("ftp://example.com/a\nb").is_err());
    }

    #[test]
    fn reserved_words_are_not_custom_codes() {
        assert!(custom_code("api").is_err());
        assert!(custom_code("health").is_err());
        assert!(custom_code("apis").is_ok());
    }

    #[test]
    fn rejects_overlong_url() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        let err = original_url(&url).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl(_)));
    }

    #[test]
    fn custom_code_follows_short_code_rules() {
        assert!(custom_code("promo1").is_ok());
        assert!(custom_code("no").is_err());
        assert!(custom_code("with space").is_err());
    }

    #[test]
    fn expiration_in_future_is_accepted() {
        let now: Timestamp = "2026-01-01T00:00:00Z".parse().unwrap();
        let parsed = expires_at("2026-01-02T00:00:00Z", now).unwrap();
        assert_eq!(parsed, now + SignedDuration::from_hours(24));
    }

    #[test]
    fn expiration_accepts_offsets() {
        let now: Timestamp = "2026-01-01T00:00:00Z".parse().unwrap();
        let parsed = expires_at("2026-01-01T08:00:01+08:00", now).unwrap();
        assert_eq!(parsed, now + SignedDuration::from_secs(1));
    }

    #[test]
    fn expiration_in_past_is_rejected() {
        let now: Timestamp = "2026-01-01T00:00:00Z".parse().unwrap();
        let err = expires_at("2025-12-31T23:59:59Z", now).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidExpiration(_)));
    }

    #[test]
    fn expiration_equal_to_now_is_rejected() {
        let now: Timestamp = "2026-01-01T00:00:00Z".parse().unwrap();
        assert!(expires_at("2026-01-01T00:00:00Z", now).is_err());
    }

    #[test]
    fn malformed_expiration_is_rejected() {
        let now = Timestamp::now();
        assert!(expires_at("tomorrow", now).is_err());
        assert!(expires_at("2026-13-01T00:00:00Z", now).is_err());
        assert!(expires_at("", now).is_err());
    }
}
