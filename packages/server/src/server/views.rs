//! HTML rendering for the URL check page.

use axum::response::Html;
use url_features::Verdict;

use crate::server::error::AppError;
use crate::server::static_files::template;

const PAGE_TEMPLATE: &str = "malicious_url.html";

/// What the page shows. `awaiting_input` has neither field set,
/// `showing_result` has both.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub url: Option<String>,
    pub verdict: Option<Verdict>,
}

impl PageView {
    pub fn awaiting_input() -> Self {
        Self::default()
    }

    pub fn showing_result(url: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            url: Some(url.into()),
            verdict: Some(verdict),
        }
    }
}

/// Fill the page template.
pub fn render_page(view: &PageView) -> Result<Html<String>, AppError> {
    let page = template(PAGE_TEMPLATE).ok_or(AppError::MissingTemplate(PAGE_TEMPLATE))?;

    let url = view.url.as_deref().map(escape_html).unwrap_or_default();
    let result = view.verdict.map(render_result).unwrap_or_default();

    // Substitute the result first so an echoed URL can never inject a slot
    Ok(Html(page.replace("{{result}}", &result).replace("{{url}}", &url)))
}

fn render_result(verdict: Verdict) -> String {
    let class = match verdict {
        Verdict::Safe => "result-safe",
        Verdict::Malicious => "result-malicious",
    };
    format!(
        r#"<p id="result" class="result {}">Result: <strong>{}</strong></p>"#,
        class, verdict
    )
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
