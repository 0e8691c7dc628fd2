use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use snip_core::{ShortCode, StoreError};
use snip_redirector::Resolution;
use tracing::debug;

use crate::error::Result;
use crate::state::AppState;

pub const NOT_FOUND_BODY: &str = "Short link not found.";
pub const MISSING_CODE_BODY: &str = "Missing short code.";

pub async fn missing_code_handler() -> Response {
    (StatusCode::BAD_REQUEST, MISSING_CODE_BODY).into_response()
}

/// Answers with a 302 to the original URL. Missing, expired and ill-formed
/// codes all get the same 404.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let Ok(code) = ShortCode::parse(short_code) else {
        return Ok(not_found());
    };

    match state.resolver().resolve(&code).await? {
        Resolution::Found(url) => {
            let location = HeaderValue::try_from(url).map_err(|e| {
                StoreError::InvalidData(format!("stored url of '{code}' is not a valid header: {e}"))
            })?;
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        resolution => {
            debug!(code = %code, ?resolution, "no redirect");
            Ok(not_found())
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}
