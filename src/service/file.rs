use crate::error::AppError;
use crate::utils::state::AppState;
use crate::utils::validation::is_valid_file_name;
use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Multipart, Path, State};
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;
use tokio_util::io::ReaderStream;

/// Body returned by the upload endpoint, and by every structured error
/// response. `file_name` is `null` whenever the request failed.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub file_name: Option<String>,
    pub message: String,
}

/// POST /file/upload
///
/// Accepts a multipart form whose `image` field carries the file. The file
/// is stored under its original (validated) name; a name that is already
/// taken is rejected rather than overwritten.
pub async fn upload_image_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name != "image" {
            continue;
        }

        let file_name = field
            .file_name()
            .ok_or_else(|| {
                AppError::UploadInvalid("the `image` field carries no file name".to_string())
            })?
            .to_string();
        let data = field.bytes().await?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) = upload.ok_or_else(|| {
        AppError::UploadInvalid("multipart field `image` is required".to_string())
    })?;

    if !is_valid_file_name(&file_name) {
        return Err(AppError::FileNameInvalid(file_name));
    }

    let stored_name = state
        .storage
        .store(&file_name, data)
        .await
        .map_err(|err| match err.kind() {
            io::ErrorKind::AlreadyExists => AppError::FileExists(file_name.clone()),
            _ => AppError::StoreFailed(err),
        })?;

    tracing::info!("image stored: name={}", stored_name);

    Ok(Json(FileResponse {
        file_name: Some(stored_name),
        message: "Image is uploaded successfully".to_string(),
    }))
}

/// GET /file/images/{image_name}
pub async fn serve_image_handler(
    State(state): State<Arc<AppState>>,
    Path(image_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_file_name(&image_name) {
        return Err(AppError::FileNameInvalid(image_name));
    }

    let file = state
        .storage
        .retrieve(&image_name)
        .await
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::FileUnknown(image_name.clone()),
            _ => AppError::Io(err),
        })?;

    let content_length = file.metadata().await?.len();
    let file_stream = ReaderStream::new(file);
    let body = Body::from_stream(file_stream);

    // Content type is fixed to JPEG irrespective of the stored bytes.
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .header(header::CONTENT_LENGTH, content_length)
        .body(body)
        .unwrap())
}
