use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::assessment::GenerationJob;
use crate::services::progress::{ProgressSource, RandomProgress};

/// Upper bound (exclusive) for one generation tick's progress increment.
pub const MAX_GENERATION_INCREMENT: f64 = 20.0;

/// Snapshot of the generation job for the HTTP layer.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSnapshot {
    pub active: bool,
    pub progress: f64,
    pub phase: &'static str,
    pub assessment_type: Option<String>,
}

/// Simulates assessment generation: one job per instance, ticked by a
/// spawned driver until progress clamps at 100.
#[derive(Clone)]
pub struct AssessmentGenerator {
    job: Arc<RwLock<GenerationJob>>,
    tick_interval: Duration,
}

impl AssessmentGenerator {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            job: Arc::new(RwLock::new(GenerationJob::default())),
            tick_interval,
        }
    }

    /// Start generating. Returns `false` without touching the running job
    /// when one is already active.
    pub async fn start(&self, assessment_type: &str) -> bool {
        self.start_with_source(assessment_type, RandomProgress).await
    }

    /// Start with an explicit increment source (deterministic in tests).
    pub async fn start_with_source(
        &self,
        assessment_type: &str,
        source: impl ProgressSource,
    ) -> bool {
        {
            let mut job = self.job.write().await;
            if !job.begin(assessment_type) {
                tracing::debug!(
                    requested = assessment_type,
                    "Generation already in flight, ignoring start"
                );
                return false;
            }
        }

        metrics::counter!("assessments_generation_started_total").increment(1);
        tracing::info!(assessment_type, "Assessment generation started");

        self.spawn_driver(source);
        true
    }

    pub async fn snapshot(&self) -> GenerationSnapshot {
        let job = self.job.read().await;
        GenerationSnapshot {
            active: job.active,
            progress: job.progress,
            phase: job.phase(),
            assessment_type: job.assessment_type.clone(),
        }
    }

    pub async fn is_active(&self) -> bool {
        self.job.read().await.active
    }

    fn spawn_driver(&self, mut source: impl ProgressSource) {
        let job = Arc::clone(&self.job);
        let tick_interval = self.tick_interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick_interval);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let finished = job
                    .write()
                    .await
                    .advance(source.next_increment(MAX_GENERATION_INCREMENT));
                if finished {
                    break;
                }
            }
            // The ticker stops with the job; nothing fires after 100%.
            tracing::info!("Assessment generation finished");
        });
    }
}
