use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::services::generator::AssessmentGenerator;
use crate::services::notify::Notification;
use crate::services::uploads::UploadTracker;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub uploads: UploadTracker,
    pub generator: AssessmentGenerator,
    /// Consumer half of the toast channel; drained by the notifications
    /// route, one consumer by design.
    pub notifications: Arc<Mutex<mpsc::Receiver<Notification>>>,
}

impl AppState {
    pub fn new(
        uploads: UploadTracker,
        generator: AssessmentGenerator,
        notifications: mpsc::Receiver<Notification>,
    ) -> Self {
        Self {
            uploads,
            generator,
            notifications: Arc::new(Mutex::new(notifications)),
        }
    }
}
