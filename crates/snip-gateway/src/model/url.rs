use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use snip_core::{validate, ShortLink, ValidationError};
use snip_shortener::AllocateParams;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortLinkRequest {
    pub original_url: String,
    #[serde(default)]
    pub custom_code: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl CreateShortLinkRequest {
    /// Validates the request against `now` and turns it into allocation
    /// parameters. Blank optional fields count as absent.
    pub fn into_params(self, now: Timestamp) -> Result<AllocateParams, ValidationError> {
        validate::original_url(&self.original_url)?;
        let mut params = AllocateParams::new(self.original_url);

        if let Some(code) = self.custom_code.filter(|c| !c.is_empty()) {
            params = params.with_custom_code(validate::custom_code(&code)?);
        }
        if let Some(raw) = self.expires_at.filter(|e| !e.is_empty()) {
            params = params.with_expiration(validate::expires_at(&raw, now)?);
        }

        Ok(params)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortLinkResponse {
    pub short_code: String,
    pub short_url: String,
}

impl CreateShortLinkResponse {
    pub fn new(link: &ShortLink, base_url: &str) -> Self {
        Self {
            short_code: link.short_code.to_string(),
            short_url: link.short_code.to_url(base_url),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
