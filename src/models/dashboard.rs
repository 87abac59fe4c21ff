use serde::Serialize;

use crate::models::assessment::Difficulty;

/// Headline metrics for the dashboard section.
#[derive(Debug, Clone, Serialize)]
pub struct StudyStats {
    pub documents_processed: u32,
    pub assessments_completed: u32,
    pub study_time_hours: f64,
    pub average_score: u32,
    pub weekly_goal_hours: u32,
    pub current_streak_days: u32,
}

impl StudyStats {
    pub fn defaults() -> StudyStats {
        StudyStats {
            documents_processed: 24,
            assessments_completed: 18,
            study_time_hours: 47.5,
            average_score: 87,
            weekly_goal_hours: 75,
            current_streak_days: 7,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudySession {
    pub subject: &'static str,
    pub duration: &'static str,
    pub score: u32,
    pub date: &'static str,
}

impl StudySession {
    pub fn recent() -> Vec<StudySession> {
        vec![
            StudySession {
                subject: "Machine Learning",
                duration: "2h 15m",
                score: 92,
                date: "Today",
            },
            StudySession {
                subject: "Data Structures",
                duration: "1h 30m",
                score: 85,
                date: "Yesterday",
            },
            StudySession {
                subject: "Algorithms",
                duration: "3h 45m",
                score: 91,
                date: "2 days ago",
            },
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingAssessment {
    pub title: &'static str,
    pub due: &'static str,
    pub difficulty: Difficulty,
}

impl UpcomingAssessment {
    pub fn defaults() -> Vec<UpcomingAssessment> {
        vec![
            UpcomingAssessment {
                title: "ML Fundamentals Quiz",
                due: "In 2 days",
                difficulty: Difficulty::Medium,
            },
            UpcomingAssessment {
                title: "DSA Practice Test",
                due: "Next week",
                difficulty: Difficulty::Hard,
            },
            UpcomingAssessment {
                title: "Algorithm Review",
                due: "In 5 days",
                difficulty: Difficulty::Easy,
            },
        ]
    }
}
