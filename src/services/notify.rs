use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

/// Capacity of the toast channel. Sends beyond this are dropped rather
/// than blocking a simulation driver.
const CHANNEL_CAPACITY: usize = 256;

/// A transient user-facing notification (toast).
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Producer half of the single-consumer toast channel. The simulators emit
/// events here instead of calling into any UI layer.
#[derive(Clone)]
pub struct Notifier {
    tx: mpsc::Sender<Notification>,
}

impl Notifier {
    pub fn new() -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (Self { tx }, rx)
    }

    pub fn notify(&self, title: impl Into<String>, message: impl Into<String>) {
        let notification = Notification {
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
        };
        if let Err(e) = self.tx.try_send(notification) {
            tracing::warn!(error = %e, "Dropping notification, channel full or closed");
        }
    }

    /// Completion toast for a processed document.
    pub fn document_processed(&self, file_name: &str) {
        self.notify(
            "Document Processed",
            format!(
                "{} has been successfully analyzed and is ready for study.",
                file_name
            ),
        );
    }
}
