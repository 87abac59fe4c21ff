use serde::Serialize;
use strum::Display;

/// Priority tiers for recommendations, with the fixed badge-color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn color(&self) -> &'static str {
        match self {
            Priority::High => "destructive",
            Priority::Medium => "accent",
            Priority::Low => "success",
        }
    }
}

/// One personalized study recommendation card.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub id: u32,
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub priority_color: &'static str,
    pub estimated_time: &'static str,
    pub confidence: u32,
}

impl Recommendation {
    pub fn defaults() -> Vec<Recommendation> {
        vec![
            Recommendation {
                id: 1,
                kind: "Focus Area",
                title: "Strengthen Algorithm Complexity",
                description: "Your recent assessments show you could improve in time \
                              complexity analysis. Focus on Big O notation practice.",
                priority: Priority::High,
                priority_color: Priority::High.color(),
                estimated_time: "2-3 hours",
                confidence: 89,
            },
            Recommendation {
                id: 2,
                kind: "Study Schedule",
                title: "Optimal Learning Time",
                description: "Based on your activity patterns, you learn best between \
                              9-11 AM. Schedule difficult topics during this window.",
                priority: Priority::Medium,
                priority_color: Priority::Medium.color(),
                estimated_time: "Ongoing",
                confidence: 92,
            },
            Recommendation {
                id: 3,
                kind: "Content Review",
                title: "Revisit Data Structures",
                description: "It's been 2 weeks since your last deep dive into linked \
                              lists and trees. A review session is recommended.",
                priority: Priority::Low,
                priority_color: Priority::Low.color(),
                estimated_time: "1-2 hours",
                confidence: 76,
            },
        ]
    }
}

/// Study-method effectiveness entry.
#[derive(Debug, Clone, Serialize)]
pub struct StudyMethod {
    pub method: &'static str,
    pub effectiveness: u32,
    pub description: &'static str,
    pub recommended: bool,
}

impl StudyMethod {
    pub fn defaults() -> Vec<StudyMethod> {
        vec![
            StudyMethod {
                method: "Spaced Repetition",
                effectiveness: 94,
                description: "Review concepts at increasing intervals for better retention",
                recommended: true,
            },
            StudyMethod {
                method: "Active Recall",
                effectiveness: 87,
                description: "Test yourself without looking at notes to strengthen memory",
                recommended: true,
            },
            StudyMethod {
                method: "Practice Problems",
                effectiveness: 82,
                description: "Solve coding challenges to apply theoretical knowledge",
                recommended: false,
            },
            StudyMethod {
                method: "Concept Mapping",
                effectiveness: 78,
                description: "Create visual connections between related topics",
                recommended: false,
            },
        ]
    }
}

/// Weekly learning-analytics metric with its trend delta.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyInsight {
    pub metric: &'static str,
    pub value: u32,
    pub trend: &'static str,
}

impl WeeklyInsight {
    pub fn defaults() -> Vec<WeeklyInsight> {
        vec![
            WeeklyInsight {
                metric: "Study Consistency",
                value: 85,
                trend: "+12%",
            },
            WeeklyInsight {
                metric: "Knowledge Retention",
                value: 79,
                trend: "+8%",
            },
            WeeklyInsight {
                metric: "Problem Solving Speed",
                value: 71,
                trend: "+15%",
            },
            WeeklyInsight {
                metric: "Concept Understanding",
                value: 88,
                trend: "+5%",
            },
        ]
    }
}
