use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors surfaced by the API. The simulation itself cannot fail; these
/// cover request-shape problems and the busy-generator case only.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("document not found")]
    DocumentNotFound,

    #[error("an assessment generation is already in progress")]
    GenerationBusy,

    #[error("invalid upload: {0}")]
    BadUpload(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::DocumentNotFound => StatusCode::NOT_FOUND,
            ApiError::GenerationBusy => StatusCode::CONFLICT,
            ApiError::BadUpload(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
