use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Page templates, embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct Templates;

// Stylesheets and other assets served under /static
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct StaticAssets;

/// Serve an embedded static asset
pub async fn serve_static(Path(path): Path<String>) -> Response {
    serve_embedded::<StaticAssets>(path.trim_start_matches('/'))
}

fn serve_embedded<E: RustEmbed>(path: &str) -> Response {
    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

/// Template source by file name
pub fn template(name: &str) -> Option<String> {
    let file = Templates::get(name)?;
    String::from_utf8(file.data.into_owned()).ok()
}
