//! Application error type mapping to HTTP status codes and envelope format.
//!
//! The team operations define no failure conditions (unknown users and
//! clearing empty teams are no-ops; a full team is a boolean outcome), so
//! the only application error is an upstream catalog failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use rosterdex_types::error::UpstreamError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Catalog retrieval failed upstream.
    Upstream(UpstreamError),
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Upstream(e) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                e.to_string(),
            ),
        };

        let body = json!({
            "data": null,
            "meta": {
                "timestamp": chrono::Utc::now().to_rfc3339(),
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
