//! HTTP route handlers.

pub mod error;
pub mod versions;

use crate::state::AppState;
use axum::{routing::any, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Build the full application router.
pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Method check happens in the handler so every verb gets the JSON 405 body
        .route("/prompts/versions", any(versions::list_versions));

    Router::new()
        .nest("/api", api_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
