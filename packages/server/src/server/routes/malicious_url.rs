use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::views::{render_page, PageView};

/// Submitted check form
#[derive(Debug, Deserialize)]
pub struct UrlForm {
    #[serde(default)]
    pub url: Option<String>,
}

/// Empty check form
pub async fn home() -> Result<Html<String>, AppError> {
    render_page(&PageView::awaiting_input())
}

/// Classify the submitted URL and show the verdict alongside it.
///
/// A missing or empty `url` field is not an error; the empty form is shown
/// again. Any other value, whitespace included, is classified as submitted.
pub async fn check_url(
    State(state): State<AppState>,
    Form(form): Form<UrlForm>,
) -> Result<Html<String>, AppError> {
    let url = match form.url {
        Some(url) if !url.is_empty() => url,
        _ => {
            tracing::debug!("empty URL submitted");
            return render_page(&PageView::awaiting_input());
        }
    };

    let classification = state.model.classify(&url)?;
    tracing::info!(
        url_len = url.chars().count(),
        verdict = %classification.verdict,
        "URL checked"
    );

    render_page(&PageView::showing_result(url, classification.verdict))
}
