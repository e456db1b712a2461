//! Prompt version routes.

use super::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{RawQuery, State},
    http::Method,
    Json,
};
use promptvault_types::VersionRecord;
use std::sync::Arc;
use tracing::{debug, error};
use url::form_urlencoded;

/// First `category` value in a raw query string.
///
/// Repeated keys resolve to the first occurrence and `?category=` yields
/// `Some("")`; only a missing key yields `None`.
pub fn category_param(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "category")
        .map(|(_, value)| value.into_owned())
}

/// /api/prompts/versions - List every version of a prompt category.
///
/// Registered for all methods; anything but GET gets 405. On success the
/// body is the bare version array as the source returned it.
pub async fn list_versions(
    State(state): State<Arc<AppState>>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<VersionRecord>>, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let category = category_param(query.as_deref()).ok_or(ApiError::MissingCategory)?;

    match state.versions.get_prompt_versions(&category).await {
        Ok(result) => {
            debug!(
                target: "promptvault::api",
                "Listed {} versions for category '{}'",
                result.len(),
                category
            );
            Ok(Json(result.into_versions()))
        }
        Err(e) => {
            error!(target: "promptvault::api", category = %category, "list-versions error: {}", e);
            Err(e.into())
        }
    }
}
