use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

/// Status of a simulated document upload.
///
/// `Failed` is reserved: nothing in the simulator drives a task there, but
/// the wire format declares it for clients that render a failure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UploadStatus {
    Uploading,
    Processing,
    Completed,
    Failed,
}

/// One simulated upload. Created at intake, advanced by its driver, kept
/// for the life of the process.
#[derive(Debug, Clone, Serialize)]
pub struct UploadTask {
    pub id: Uuid,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub status: UploadStatus,
    pub progress: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UploadTask {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            status: UploadStatus::Uploading,
            progress: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply one upload tick. Progress never decreases; at 100 it is
    /// clamped and the task moves to `Processing`.
    ///
    /// Returns `true` on the `Uploading -> Processing` edge, which is the
    /// caller's signal to stop ticking this task.
    pub fn advance(&mut self, increment: f64) -> bool {
        if self.status != UploadStatus::Uploading {
            return false;
        }
        self.progress = (self.progress + increment.max(0.0)).min(100.0);
        self.updated_at = Utc::now();
        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.status = UploadStatus::Processing;
            return true;
        }
        false
    }

    /// `Processing -> Completed`. Returns `false` if the task was not in
    /// `Processing` (the transition never skips a phase or regresses).
    pub fn finish_processing(&mut self) -> bool {
        if self.status != UploadStatus::Processing {
            return false;
        }
        self.status = UploadStatus::Completed;
        self.updated_at = Utc::now();
        true
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, UploadStatus::Completed | UploadStatus::Failed)
    }
}

/// Metadata captured from a multipart intake. No validation is applied:
/// the advertised extension list is advisory, any name/size/type is taken
/// as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentIntake {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}
