use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::service::file::{serve_image_handler, upload_image_handler};
use crate::utils::state::AppState;

pub fn create_file_router() -> Router<Arc<AppState>> {
    Router::new()
        // Push an image
        .route("/upload", post(upload_image_handler))
        // Pull an image by its stored name
        .route("/images/{image_name}", get(serve_image_handler))
}
