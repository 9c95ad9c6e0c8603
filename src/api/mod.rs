pub mod files;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::utils::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { StatusCode::OK.into_response() }))
        .nest("/file", files::create_file_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
