// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::infrastructure::cloudwatch_client::CloudWatchClient;
use crate::infrastructure::config::load_dashboard_config;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard, health_check, metrics_api, submit_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create metrics client (infrastructure layer)
    let source = Arc::new(CloudWatchClient::new(config.metrics.base_url.clone()));

    // Create application state
    let state = Arc::new(AppState::new(source, config.page));

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard))
        .route("/api/metrics", get(metrics_api))
        .route("/api/submit-state", get(submit_state))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind_address.parse()?;
    tracing::info!(
        "Starting metrics-dashboard on {} (metrics endpoint: {})",
        addr,
        config.metrics.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
