use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub simulation: SimulationHealth,
}

#[derive(Serialize)]
pub struct SimulationHealth {
    pub uploads_in_flight: usize,
    pub generation_active: bool,
}

/// GET /health — liveness plus a snapshot of simulated activity.
/// There are no external dependencies to probe.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        simulation: SimulationHealth {
            uploads_in_flight: state.uploads.in_flight().await,
            generation_active: state.generator.is_active().await,
        },
    })
}
