use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::models::assessment::{AssessmentType, RecentAssessment};
use crate::routes::error::ApiError;
use crate::services::generator::GenerationSnapshot;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub assessment_type: String,
}

/// POST /api/v1/assessments/generate — kick off a simulated generation.
/// 409 while one is already running; the running job is left untouched.
pub async fn start_generation(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerationSnapshot>), ApiError> {
    if !state.generator.start(&req.assessment_type).await {
        return Err(ApiError::GenerationBusy);
    }
    Ok((StatusCode::ACCEPTED, Json(state.generator.snapshot().await)))
}

/// GET /api/v1/assessments/generation — progress, phase, and activity.
pub async fn generation_status(State(state): State<AppState>) -> Json<GenerationSnapshot> {
    Json(state.generator.snapshot().await)
}

/// GET /api/v1/assessments/types — the offered formats.
pub async fn assessment_types() -> Json<Vec<AssessmentType>> {
    Json(AssessmentType::catalog())
}

/// GET /api/v1/assessments/recent — fixed history list.
pub async fn recent_assessments() -> Json<Vec<RecentAssessment>> {
    Json(RecentAssessment::defaults())
}
