//! Unified error types for the news feed site
//!
//! This module defines error types for each layer:
//! - `SourceError`: spreadsheet feed adapter errors
//! - `LoadFailure`: why a timed load produced no table
//! - `AppError`: HTTP layer errors (only the JSON endpoint surfaces these)

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Spreadsheet feed errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Feed error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    Payload(String),
}

/// Failure outcome of a single load
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("No response within {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Source(#[from] SourceError),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("News feed is not configured")]
    NotConfigured,

    #[error("Upstream error: {0}")]
    Upstream(#[from] LoadFailure),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Not configured",
                Some(self.to_string()),
            ),
            AppError::Upstream(e) => {
                tracing::warn!("Upstream error: {}", e);
                match e {
                    LoadFailure::Timeout(_) => {
                        (StatusCode::GATEWAY_TIMEOUT, "Feed timed out", None)
                    }
                    LoadFailure::Source(_) => (StatusCode::BAD_GATEWAY, "Feed unavailable", None),
                }
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
