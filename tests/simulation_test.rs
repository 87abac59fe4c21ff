use std::time::Duration;

use futures::future::join_all;
use studyai_demo::models::document::{DocumentIntake, UploadStatus};
use studyai_demo::services::generator::AssessmentGenerator;
use studyai_demo::services::notify::Notifier;
use studyai_demo::services::progress::ScriptedProgress;
use studyai_demo::services::uploads::{UploadTiming, UploadTracker};

fn intake(name: &str, size_bytes: u64, mime_type: &str) -> DocumentIntake {
    DocumentIntake {
        name: name.to_string(),
        size_bytes,
        mime_type: mime_type.to_string(),
    }
}

/// Scenario: intake "notes.pdf" (2048 bytes); after enough ticks the task
/// is Completed at 100% and a completion toast names the file.
#[tokio::test(start_paused = true)]
async fn notes_pdf_completes_and_notifies() {
    let (notifier, mut notifications) = Notifier::new();
    let tracker = UploadTracker::new(notifier, UploadTiming::default());

    let task = tracker
        .intake_with_source(
            intake("notes.pdf", 2048, "application/pdf"),
            ScriptedProgress::new([25.0, 25.0, 25.0, 25.0]),
        )
        .await;

    // Four 500 ms ticks to 100%, then the 2 s processing delay.
    tokio::time::sleep(Duration::from_millis(4250)).await;

    let finished = tracker.get(task.id).await.expect("task still listed");
    assert_eq!(finished.status, UploadStatus::Completed);
    assert_eq!(finished.progress, 100.0);
    assert_eq!(finished.name, "notes.pdf");
    assert_eq!(finished.size_bytes, 2048);

    let toast = notifications.recv().await.expect("completion toast");
    assert!(toast.message.contains("notes.pdf"));
}

/// Status only ever walks Uploading -> Processing -> Completed; the
/// Processing phase is never skipped and no observation regresses.
#[tokio::test(start_paused = true)]
async fn status_never_skips_or_regresses() {
    let (notifier, _notifications) = Notifier::new();
    let tracker = UploadTracker::new(notifier, UploadTiming::default());

    let task = tracker
        .intake_with_source(
            intake("deck.docx", 9000, "application/vnd.openxmlformats"),
            ScriptedProgress::new([50.0, 50.0]),
        )
        .await;

    let rank = |s: UploadStatus| match s {
        UploadStatus::Uploading => 0,
        UploadStatus::Processing => 1,
        UploadStatus::Completed => 2,
        UploadStatus::Failed => panic!("failed status is never driven"),
    };

    // Sample between ticks so each observation sees a settled state.
    tokio::time::sleep(Duration::from_millis(250)).await;
    let mut observed = Vec::new();
    for _ in 0..8 {
        let snapshot = tracker.get(task.id).await.unwrap();
        if observed.last() != Some(&snapshot.status) {
            observed.push(snapshot.status);
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    assert_eq!(
        observed,
        [
            UploadStatus::Uploading,
            UploadStatus::Processing,
            UploadStatus::Completed,
        ]
    );
    assert!(observed.windows(2).all(|w| rank(w[0]) < rank(w[1])));
}

/// Concurrent intakes tick independently and the list keeps intake order.
#[tokio::test(start_paused = true)]
async fn concurrent_uploads_do_not_interfere() {
    let (notifier, mut notifications) = Notifier::new();
    let tracker = UploadTracker::new(notifier, UploadTiming::default());

    let created = join_all([
        tracker.intake_with_source(
            intake("fast.md", 100, "text/markdown"),
            ScriptedProgress::new([100.0]),
        ),
        tracker.intake_with_source(
            intake("slow.txt", 5000, "text/plain"),
            ScriptedProgress::new([10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0]),
        ),
    ])
    .await;
    let (fast, slow) = (&created[0], &created[1]);

    // Fast task: Processing at 500 ms, Completed at 2500 ms. Slow task is
    // still uploading then.
    tokio::time::sleep(Duration::from_millis(2750)).await;
    assert_eq!(
        tracker.get(fast.id).await.unwrap().status,
        UploadStatus::Completed
    );
    let slow_snapshot = tracker.get(slow.id).await.unwrap();
    assert_eq!(slow_snapshot.status, UploadStatus::Uploading);
    assert!(slow_snapshot.progress < 100.0);

    // Let the slow one finish too.
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(
        tracker.get(slow.id).await.unwrap().status,
        UploadStatus::Completed
    );

    let names: Vec<String> = tracker.list().await.into_iter().map(|t| t.name).collect();
    assert_eq!(names, ["fast.md", "slow.txt"]);

    let first = notifications.recv().await.unwrap();
    let second = notifications.recv().await.unwrap();
    assert!(first.message.contains("fast.md"));
    assert!(second.message.contains("slow.txt"));
}

/// Scenario: start("Quick Quiz"), tick until done; active flips false and
/// later ticks have no observable effect.
#[tokio::test(start_paused = true)]
async fn quick_quiz_generation_runs_down_and_stops() {
    let generator = AssessmentGenerator::new(Duration::from_millis(500));

    assert!(
        generator
            .start_with_source("Quick Quiz", ScriptedProgress::new([19.0, 19.0, 19.0, 19.0, 19.0, 19.0]))
            .await
    );

    tokio::time::sleep(Duration::from_millis(3250)).await;
    let done = generator.snapshot().await;
    assert!(!done.active);
    assert_eq!(done.progress, 100.0);
    assert_eq!(done.phase, "Finalizing assessment");

    // No leaked ticker: nothing changes as more time passes.
    tokio::time::sleep(Duration::from_secs(30)).await;
    let later = generator.snapshot().await;
    assert!(!later.active);
    assert_eq!(later.progress, 100.0);
}

/// Starting while a generation is active is a no-op: the running job keeps
/// its progress and type.
#[tokio::test(start_paused = true)]
async fn second_start_is_rejected_without_reset() {
    let generator = AssessmentGenerator::new(Duration::from_millis(500));

    generator
        .start_with_source("Comprehensive Test", ScriptedProgress::new([15.0, 15.0, 70.0]))
        .await;
    tokio::time::sleep(Duration::from_millis(750)).await;

    let before = generator.snapshot().await;
    assert!(before.active);
    assert!(before.progress > 0.0);

    assert!(!generator.start("Quick Quiz").await);

    let after = generator.snapshot().await;
    assert!(after.active);
    assert_eq!(after.progress, before.progress);
    assert_eq!(after.assessment_type.as_deref(), Some("Comprehensive Test"));
}
