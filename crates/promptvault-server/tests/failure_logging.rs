//! Diagnostic logging of the version-list endpoint.
//!
//! A source failure must produce exactly one ERROR line on `promptvault::api`
//! tagged with the category; rejected requests log nothing at ERROR.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use promptvault_core::{VersionError, VersionSource};
use promptvault_server::{config::Config, routes, state::AppState};
use promptvault_types::PromptVersions;
use std::io;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for formatted log output.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    fn error_lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

struct FailingSource;

#[async_trait]
impl VersionSource for FailingSource {
    async fn get_prompt_versions(&self, _category: &str) -> promptvault_core::Result<PromptVersions> {
        Err(VersionError::Unavailable("db down".into()))
    }
}

/// Run one request with a subscriber capturing `promptvault` targets.
///
/// `#[tokio::test]` runs on a current-thread runtime, so the thread-local
/// default subscriber sees every event the handler emits.
async fn send_capturing(method: &str, uri: &str) -> (StatusCode, LogBuffer) {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("promptvault=trace")
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let state = Arc::new(AppState::with_source(Config::default(), Arc::new(FailingSource)));
    let app: Router = routes::router(state);
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    (response.status(), logs)
}

#[tokio::test]
async fn test_source_failure_logs_one_error_with_category() {
    let (status, logs) = send_capturing("GET", "/api/prompts/versions?category=x").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let errors = logs.error_lines();
    assert_eq!(errors.len(), 1, "logs: {}", logs.contents());
    assert!(errors[0].contains("promptvault::api"));
    assert!(errors[0].contains("category=x"));
    assert!(errors[0].contains("db down"));
}

#[tokio::test]
async fn test_missing_category_logs_no_error() {
    let (status, logs) = send_capturing("GET", "/api/prompts/versions").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(logs.error_lines().is_empty(), "logs: {}", logs.contents());
}

#[tokio::test]
async fn test_wrong_method_logs_no_error() {
    let (status, logs) = send_capturing("POST", "/api/prompts/versions?category=x").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(logs.error_lines().is_empty(), "logs: {}", logs.contents());
}
