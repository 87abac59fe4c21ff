use axum::extract::{Multipart, Path, State};
use axum::Json;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::document::{DocumentIntake, UploadTask};
use crate::routes::error::ApiError;

/// POST /api/v1/documents — intake one or more documents for simulated
/// processing.
///
/// Only the file name, MIME type, and byte count are captured; the content
/// is discarded. The advertised extension list (.pdf .docx .doc .txt .md)
/// is advisory, nothing about the upload is validated.
pub async fn upload_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<UploadTask>>, ApiError> {
    let mut created = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadUpload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or("untitled").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadUpload(e.to_string()))?;

        let task = state
            .uploads
            .intake(DocumentIntake {
                name,
                size_bytes: data.len() as u64,
                mime_type,
            })
            .await;
        created.push(task);
    }

    if created.is_empty() {
        return Err(ApiError::BadUpload("no file field in request".to_string()));
    }
    Ok(Json(created))
}

/// GET /api/v1/documents — all tasks in intake order.
pub async fn list_documents(State(state): State<AppState>) -> Json<Vec<UploadTask>> {
    Json(state.uploads.list().await)
}

/// GET /api/v1/documents/{id} — one task's current state.
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UploadTask>, ApiError> {
    state
        .uploads
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::DocumentNotFound)
}
