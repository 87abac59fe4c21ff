use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::document::{DocumentIntake, UploadTask};
use crate::services::notify::Notifier;
use crate::services::progress::{ProgressSource, RandomProgress};

/// Upper bound (exclusive) for one upload tick's progress increment.
pub const MAX_UPLOAD_INCREMENT: f64 = 30.0;

/// Timing knobs for the simulated upload lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct UploadTiming {
    /// Interval between progress ticks.
    pub tick_interval: Duration,
    /// One-shot delay between Processing and Completed.
    pub processing_delay: Duration,
}

impl Default for UploadTiming {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(500),
            processing_delay: Duration::from_millis(2000),
        }
    }
}

/// Drives the simulated upload lifecycle for every intaken document.
///
/// Tasks are appended in intake order and kept for the life of the process.
/// Each task gets its own driver; a driver only ever mutates its own task's
/// entry, so tasks tick concurrently without interference.
#[derive(Clone)]
pub struct UploadTracker {
    tasks: Arc<RwLock<Vec<UploadTask>>>,
    notifier: Notifier,
    timing: UploadTiming,
}

impl UploadTracker {
    pub fn new(notifier: Notifier, timing: UploadTiming) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Vec::new())),
            notifier,
            timing,
        }
    }

    /// Accept a document and start its simulated upload. Any name, size,
    /// and MIME type is taken as-is; nothing is validated or stored.
    pub async fn intake(&self, intake: DocumentIntake) -> UploadTask {
        self.intake_with_source(intake, RandomProgress).await
    }

    /// Intake with an explicit increment source (deterministic in tests).
    pub async fn intake_with_source(
        &self,
        intake: DocumentIntake,
        source: impl ProgressSource,
    ) -> UploadTask {
        let task = UploadTask::new(intake.name, intake.size_bytes, intake.mime_type);
        let snapshot = task.clone();

        self.tasks.write().await.push(task);

        metrics::counter!("documents_uploaded_total").increment(1);
        metrics::gauge!("documents_in_flight").increment(1.0);
        tracing::info!(
            task_id = %snapshot.id,
            file = %snapshot.name,
            size_bytes = snapshot.size_bytes,
            mime_type = %snapshot.mime_type,
            "Document intake"
        );

        self.spawn_driver(snapshot.id, snapshot.name.clone(), source);
        snapshot
    }

    /// All tasks in intake order.
    pub async fn list(&self) -> Vec<UploadTask> {
        self.tasks.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<UploadTask> {
        self.tasks.read().await.iter().find(|t| t.id == id).cloned()
    }

    /// Number of tasks that have not reached a terminal status.
    pub async fn in_flight(&self) -> usize {
        self.tasks
            .read()
            .await
            .iter()
            .filter(|t| !t.is_terminal())
            .count()
    }

    fn spawn_driver(&self, id: Uuid, name: String, mut source: impl ProgressSource) {
        let tasks = Arc::clone(&self.tasks);
        let notifier = self.notifier.clone();
        let timing = self.timing;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(timing.tick_interval);
            // The first interval tick completes immediately; consume it so
            // the first increment lands one full interval after intake.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let entered_processing = {
                    let mut tasks = tasks.write().await;
                    match tasks.iter_mut().find(|t| t.id == id) {
                        Some(task) => task.advance(source.next_increment(MAX_UPLOAD_INCREMENT)),
                        None => return,
                    }
                };
                if entered_processing {
                    break;
                }
            }
            // The repeating timer stops at the Processing edge.
            drop(ticker);

            tracing::debug!(task_id = %id, file = %name, "Upload finished, processing");
            tokio::time::sleep(timing.processing_delay).await;

            let completed = {
                let mut tasks = tasks.write().await;
                tasks
                    .iter_mut()
                    .find(|t| t.id == id)
                    .map(|t| t.finish_processing())
                    .unwrap_or(false)
            };

            if completed {
                metrics::counter!("documents_processed_total").increment(1);
                metrics::gauge!("documents_in_flight").decrement(1.0);
                notifier.document_processed(&name);
                tracing::info!(task_id = %id, file = %name, "Document processed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::UploadStatus;
    use crate::services::progress::ScriptedProgress;

    fn intake(name: &str, size: u64) -> DocumentIntake {
        DocumentIntake {
            name: name.to_string(),
            size_bytes: size,
            mime_type: "application/pdf".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn upload_walks_through_all_three_phases() {
        let (notifier, mut rx) = Notifier::new();
        let tracker = UploadTracker::new(notifier, UploadTiming::default());

        let task = tracker
            .intake_with_source(intake("notes.pdf", 2048), ScriptedProgress::new([40.0, 40.0, 40.0]))
            .await;
        assert_eq!(task.status, UploadStatus::Uploading);

        // Three ticks at 500 ms each reach 100 and enter Processing.
        tokio::time::sleep(Duration::from_millis(1600)).await;
        let snapshot = tracker.get(task.id).await.unwrap();
        assert_eq!(snapshot.status, UploadStatus::Processing);
        assert_eq!(snapshot.progress, 100.0);

        // The fixed processing delay then lands in Completed.
        tokio::time::sleep(Duration::from_millis(2100)).await;
        let snapshot = tracker.get(task.id).await.unwrap();
        assert_eq!(snapshot.status, UploadStatus::Completed);
        assert_eq!(snapshot.progress, 100.0);
        assert_eq!(tracker.in_flight().await, 0);

        let toast = rx.recv().await.expect("completion toast");
        assert!(toast.message.contains("notes.pdf"));
    }

    #[tokio::test(start_paused = true)]
    async fn tasks_accumulate_in_intake_order() {
        let (notifier, _rx) = Notifier::new();
        let tracker = UploadTracker::new(notifier, UploadTiming::default());

        for name in ["a.pdf", "b.docx", "c.md"] {
            tracker
                .intake_with_source(intake(name, 16), ScriptedProgress::new([100.0]))
                .await;
        }
        tokio::time::sleep(Duration::from_secs(5)).await;

        let tasks = tracker.list().await;
        let names: Vec<_> = tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.docx", "c.md"]);
        assert!(tasks.iter().all(|t| t.status == UploadStatus::Completed));
    }

    #[tokio::test(start_paused = true)]
    async fn progress_never_decreases_across_ticks() {
        let (notifier, _rx) = Notifier::new();
        let tracker = UploadTracker::new(notifier, UploadTiming::default());

        let task = tracker
            .intake_with_source(
                intake("slow.txt", 64),
                ScriptedProgress::new([10.0, 0.0, 25.0, 5.0, 29.0, 29.0, 29.0]),
            )
            .await;

        let mut last = 0.0;
        for _ in 0..8 {
            tokio::time::sleep(Duration::from_millis(500)).await;
            let snapshot = tracker.get(task.id).await.unwrap();
            assert!(snapshot.progress >= last);
            last = snapshot.progress;
        }
        assert_eq!(last, 100.0);
    }
}
