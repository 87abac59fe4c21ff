mod app_state;
mod config;
mod models;
mod routes;
mod services;

use axum::response::Html;
use axum::{routing::get, routing::post, Router};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use app_state::AppState;
use config::AppConfig;
use services::generator::AssessmentGenerator;
use services::notify::Notifier;
use services::uploads::UploadTracker;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing studyai-demo server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!(
        "documents_uploaded_total",
        "Total documents taken in for simulated processing"
    );
    metrics::describe_counter!(
        "documents_processed_total",
        "Total documents that finished the simulated lifecycle"
    );
    metrics::describe_gauge!(
        "documents_in_flight",
        "Documents currently uploading or processing"
    );
    metrics::describe_counter!(
        "assessments_generation_started_total",
        "Total assessment generation runs started"
    );

    // Wire up the simulation services
    let (notifier, notifications) = Notifier::new();
    let uploads = UploadTracker::new(notifier, config.upload_timing());
    let generator = AssessmentGenerator::new(config.generation_tick());
    let state = AppState::new(uploads, generator, notifications);

    // Build API routes
    let app = Router::new()
        // Static UI (embedded at compile time)
        .route("/", get(|| async { Html(include_str!("../static/index.html")) }))
        // API endpoints
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/v1/documents",
            get(routes::documents::list_documents).post(routes::documents::upload_documents),
        )
        .route("/api/v1/documents/{id}", get(routes::documents::get_document))
        .route(
            "/api/v1/assessments/generate",
            post(routes::assessments::start_generation),
        )
        .route(
            "/api/v1/assessments/generation",
            get(routes::assessments::generation_status),
        )
        .route(
            "/api/v1/assessments/types",
            get(routes::assessments::assessment_types),
        )
        .route(
            "/api/v1/assessments/recent",
            get(routes::assessments::recent_assessments),
        )
        .route("/api/v1/dashboard", get(routes::dashboard::dashboard))
        .route(
            "/api/v1/recommendations",
            get(routes::recommendations::recommendations),
        )
        .route(
            "/api/v1/notifications",
            get(routes::notifications::drain_notifications),
        )
        .with_state(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024)); // 10 MB limit

    tracing::info!("Starting studyai-demo on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
