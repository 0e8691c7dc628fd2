use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use jiff::Timestamp;
use snip_core::{ShortCode, ShortLink};
use tracing::info;

use crate::error::{AppError, Result};
use crate::model::{CreateShortLinkRequest, CreateShortLinkResponse, ExistsResponse};
use crate::state::AppState;

pub async fn create_short_link_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateShortLinkRequest>, JsonRejection>,
) -> Result<Json<CreateShortLinkResponse>> {
    let Json(request) = payload?;
    let params = request.into_params(Timestamp::now())?;

    let link = state.allocator().allocate(params).await?;
    let response = CreateShortLinkResponse::new(&link, state.base_url());
    info!(code = %link.short_code, short_url = %response.short_url, "created short link");

    Ok(Json(response))
}

pub async fn get_short_link_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortLink>> {
    let code = ShortCode::parse(short_code).map_err(|_| AppError::NotFound)?;

    state
        .resolver()
        .lookup(&code)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Reports whether a code is taken. Ill-formed codes can never be stored, so
/// they are answered without a store round trip.
pub async fn exists_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ExistsResponse>> {
    let exists = match ShortCode::parse(short_code) {
        Ok(code) => state.resolver().exists(&code).await?,
        Err(_) => false,
    };

    Ok(Json(ExistsResponse { exists }))
}
