use axum::Json;
use serde::Serialize;

use crate::models::recommendation::{Recommendation, StudyMethod, WeeklyInsight};

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    pub study_methods: Vec<StudyMethod>,
    pub weekly_insights: Vec<WeeklyInsight>,
}

/// GET /api/v1/recommendations — fixed recommendation content.
pub async fn recommendations() -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        recommendations: Recommendation::defaults(),
        study_methods: StudyMethod::defaults(),
        weekly_insights: WeeklyInsight::defaults(),
    })
}
