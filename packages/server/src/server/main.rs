// Main entry point for the URL check server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url_features::UrlModel;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,url_features=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting malicious URL checker");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        feature_names = %config.feature_names_path.display(),
        model = %config.model_path.display(),
        "Configuration loaded"
    );

    // Model artifacts must load before anything is served
    let model = UrlModel::load(&config.feature_names_path, &config.model_path)
        .context("Failed to load model artifacts")?;
    tracing::info!(features = model.schema().len(), "Model loaded");

    let app = build_app(Arc::new(model));

    // Start server
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
