use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::{StoreError, ValidationError};
use snip_redirector::RedirectorError;
use snip_shortener::ShortenerError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
    #[error(transparent)]
    Redirector(#[from] RedirectorError),
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error("Short link not found")]
    NotFound,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Shortener(err) => match err {
                ShortenerError::Validation(_) | ShortenerError::CodeConflict(_) => {
                    StatusCode::BAD_REQUEST
                }
                ShortenerError::AllocationExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
                ShortenerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Redirector(_) | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Storage details stay in the logs.
        let message = if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
