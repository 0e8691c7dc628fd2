use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_short_link_handler, exists_handler, get_short_link_handler, health_handler,
    missing_code_handler, redirect_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/short-link", post(create_short_link_handler))
            .route("/api/short-link/{short_code}", get(get_short_link_handler))
            .route("/api/short-link/{short_code}/exists", get(exists_handler))
            .route("/", get(missing_code_handler))
            .route("/{short_code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
