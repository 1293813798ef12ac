use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use url_features::ModelError;

use crate::server::static_files::template;

/// Errors surfaced by request handlers.
///
/// Clients only ever see a generic error page; details go to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("classification failed: {0}")]
    Classification(#[from] ModelError),

    #[error("template not found: {0}")]
    MissingTemplate(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        let body = template("error.html")
            .unwrap_or_else(|| "<h1>Something went wrong</h1>".to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}
