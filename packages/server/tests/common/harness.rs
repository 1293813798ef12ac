//! Router test harness.
//!
//! Requests are sent straight into the axum router with `oneshot`; no
//! socket is bound.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use server_core::server::build_app;
use tempfile::TempDir;
use tower::ServiceExt;
use url_features::UrlModel;

use super::shortener_model;

/// Router plus the temp dir holding its artifacts
pub struct TestHarness {
    pub app: Router,
    _artifacts: Option<TempDir>,
}

/// Buffered response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestHarness {
    pub fn new() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let (dir, model) = shortener_model().expect("fixture artifacts load");
        Self {
            app: build_app(Arc::new(model)),
            _artifacts: Some(dir),
        }
    }

    pub fn with_model(model: UrlModel) -> Self {
        Self {
            app: build_app(Arc::new(model)),
            _artifacts: None,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// POST an already url-encoded form body
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
