//! JSON error responses for API routes.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use promptvault_core::VersionError;
use promptvault_types::ErrorResponse;
use thiserror::Error;

/// Every way an API request can fail. Rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing category")]
    MissingCategory,

    #[error(transparent)]
    Versions(#[from] VersionError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingCategory => StatusCode::BAD_REQUEST,
            ApiError::Versions(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));

        match self {
            ApiError::MethodNotAllowed => (status, [(header::ALLOW, "GET")], body).into_response(),
            _ => (status, body).into_response(),
        }
    }
}
