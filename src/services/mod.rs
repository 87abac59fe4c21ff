pub mod generator;
pub mod notify;
pub mod progress;
pub mod uploads;
