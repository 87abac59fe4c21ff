use axum::Json;
use serde::Serialize;

use crate::models::dashboard::{StudySession, StudyStats, UpcomingAssessment};

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: StudyStats,
    pub recent_sessions: Vec<StudySession>,
    pub upcoming_assessments: Vec<UpcomingAssessment>,
}

/// GET /api/v1/dashboard — fixed dashboard data.
pub async fn dashboard() -> Json<DashboardResponse> {
    Json(DashboardResponse {
        stats: StudyStats::defaults(),
        recent_sessions: StudySession::recent(),
        upcoming_assessments: UpcomingAssessment::defaults(),
    })
}
