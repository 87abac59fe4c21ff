use serde::Serialize;
use strum::Display;

/// Difficulty tiers shared by the assessment catalog and dashboard lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Fixed accent-color lookup used by the UI badge styling.
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Easy => "success",
            Difficulty::Medium => "accent",
            Difficulty::Hard => "primary",
        }
    }
}

/// Human-readable phase for a generation progress percentage.
///
/// Brackets are half-open on the lower end of each higher bracket; the
/// final bracket is closed at 100.
pub fn phase_label(progress: f64) -> &'static str {
    if progress < 30.0 {
        "Analyzing study materials"
    } else if progress < 60.0 {
        "Identifying key concepts"
    } else if progress < 90.0 {
        "Generating questions"
    } else {
        "Finalizing assessment"
    }
}

/// The single simulated generation job. At most one per service instance;
/// starting while active is a no-op.
#[derive(Debug, Clone, Default)]
pub struct GenerationJob {
    pub active: bool,
    pub progress: f64,
    pub assessment_type: Option<String>,
}

impl GenerationJob {
    /// Begin a run if idle. Returns `false` (and changes nothing) when a
    /// generation is already in flight.
    pub fn begin(&mut self, assessment_type: impl Into<String>) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.progress = 0.0;
        self.assessment_type = Some(assessment_type.into());
        true
    }

    /// Apply one generation tick. At 100 the job clamps and deactivates;
    /// returns `true` on that terminal edge.
    pub fn advance(&mut self, increment: f64) -> bool {
        if !self.active {
            return false;
        }
        self.progress = (self.progress + increment.max(0.0)).min(100.0);
        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.active = false;
            return true;
        }
        false
    }

    pub fn phase(&self) -> &'static str {
        phase_label(self.progress)
    }
}

/// Catalog entry for one of the offered assessment formats.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentType {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub color: &'static str,
}

impl AssessmentType {
    /// The three offered formats, in display order.
    pub fn catalog() -> Vec<AssessmentType> {
        vec![
            AssessmentType {
                name: "Quick Quiz",
                description: "5-10 multiple choice questions",
                duration: "5-10 mins",
                difficulty: Difficulty::Easy,
                color: Difficulty::Easy.color(),
            },
            AssessmentType {
                name: "Comprehensive Test",
                description: "20-30 mixed format questions",
                duration: "30-45 mins",
                difficulty: Difficulty::Medium,
                color: Difficulty::Medium.color(),
            },
            AssessmentType {
                name: "Practice Exam",
                description: "50+ questions with detailed explanations",
                duration: "60-90 mins",
                difficulty: Difficulty::Hard,
                color: Difficulty::Hard.color(),
            },
        ]
    }
}

/// A past (or pending) assessment shown in the history list.
#[derive(Debug, Clone, Serialize)]
pub struct RecentAssessment {
    pub title: &'static str,
    pub score: Option<u32>,
    pub total_questions: u32,
    pub completed_at: Option<&'static str>,
    pub difficulty: Difficulty,
    pub status: &'static str,
}

impl RecentAssessment {
    pub fn defaults() -> Vec<RecentAssessment> {
        vec![
            RecentAssessment {
                title: "Machine Learning Fundamentals",
                score: Some(87),
                total_questions: 25,
                completed_at: Some("2 hours ago"),
                difficulty: Difficulty::Medium,
                status: "completed",
            },
            RecentAssessment {
                title: "Data Structures Review",
                score: Some(92),
                total_questions: 15,
                completed_at: Some("Yesterday"),
                difficulty: Difficulty::Easy,
                status: "completed",
            },
            RecentAssessment {
                title: "Algorithm Analysis",
                score: None,
                total_questions: 30,
                completed_at: None,
                difficulty: Difficulty::Hard,
                status: "pending",
            },
        ]
    }
}
