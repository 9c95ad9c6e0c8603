use std::io;

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::service::file::FileResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid image file name: {0}")]
    FileNameInvalid(String), // Contains the rejected name

    #[error("image unknown: {0}")]
    FileUnknown(String), // Contains the requested name

    #[error("image already exists: {0}")]
    FileExists(String), // Contains the colliding name

    #[error("image upload invalid: {0}")]
    UploadInvalid(String), // Contains a descriptive message

    #[error("failed to store image: {0}")]
    StoreFailed(#[source] io::Error),

    // Internal Errors
    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Generating response for AppError: {:?}", self);

        let (status_code, message) = match &self {
            Self::FileNameInvalid(name) => (
                StatusCode::BAD_REQUEST,
                format!("invalid image file name `{name}`"),
            ),
            Self::FileUnknown(name) => {
                (StatusCode::NOT_FOUND, format!("image `{name}` not found"))
            }
            Self::FileExists(name) => (
                StatusCode::CONFLICT,
                format!("image `{name}` already exists"),
            ),
            Self::UploadInvalid(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Multipart(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::StoreFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Image is not uploaded due to server error".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "an internal server error occurred".to_string(),
            ),
        };

        (
            status_code,
            Json(FileResponse {
                file_name: None,
                message,
            }),
        )
            .into_response()
    }
}
