use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    features: usize,
}

/// Health check endpoint
///
/// The model is loaded before the listener is bound, so a responding server
/// always has a usable model.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        features: state.model.schema().len(),
    })
}
