pub mod assessments;
pub mod dashboard;
pub mod documents;
pub mod error;
pub mod health;
pub mod metrics;
pub mod notifications;
pub mod recommendations;
