use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::services::notify::Notification;

/// GET /api/v1/notifications — drain pending toasts.
///
/// Destructive read: the page polls this and shows each toast once.
pub async fn drain_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    let mut rx = state.notifications.lock().await;
    let mut pending = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        pending.push(notification);
    }
    Json(pending)
}
