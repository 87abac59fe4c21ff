//! StudyAI Demo Platform
//!
//! This library provides the core functionality for the StudyAI demo
//! service: simulated document upload/processing, simulated assessment
//! generation, and the fixed catalog data behind the landing page. Nothing
//! here performs real I/O — every delay is synthetic and every dataset is
//! compiled in.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
