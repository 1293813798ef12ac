//! Application setup and router configuration.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use url_features::UrlModel;

use crate::server::routes::{check_url, health_handler, home};
use crate::server::static_files::serve_static;

/// Shared application state
///
/// The model is loaded once at startup and never mutated, so handlers read
/// it concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<UrlModel>,
}

/// Build the Axum application router
pub fn build_app(model: Arc<UrlModel>) -> Router {
    let state = AppState { model };

    Router::new()
        .route("/", get(home))
        .route("/malicious_url", get(home).post(check_url))
        // Health check
        .route("/health", get(health_handler))
        .route("/static/*path", get(serve_static))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
