//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Upstream Errors**: the Blip API answered with a non-success status,
///   which is relayed unchanged to the local caller
/// - **Transport Errors**: the Blip API could not be reached at all
/// - **Workflow Errors**: a multi-step route could not continue (missing
///   batch ID, batch never finished processing)
/// - **Fixture Errors**: the sample JSON files could not be read or parsed
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The Blip API returned a non-success status.
    ///
    /// The remote status and body are relayed verbatim; this crate never
    /// rewrites or wraps what the upstream said.
    #[error("upstream returned status {status}")]
    Upstream {
        status: u16,
        body: serde_json::Value,
    },

    /// The request to the Blip API failed at the transport level
    /// (connection refused, DNS failure, timeout).
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Creating transactions did not yield a `batch_id`, so the workflow
    /// cannot poll for processing status.
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("no batch_id received from creating transactions")]
    MissingBatchId,

    /// The transaction batch never reached the `complete` state within the
    /// polling window.
    ///
    /// Returns HTTP 504 Gateway Timeout.
    #[error("transactions were not all processed before timeout")]
    ProcessingTimeout,

    /// A sample data fixture could not be read from disk.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("failed to read sample data: {0}")]
    SampleData(#[from] std::io::Error),

    /// The sample enduser fixture contains no entries, so the workflow has
    /// no enduser to query bills for.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("sample enduser fixture is empty")]
    NoSampleEndusers,

    /// A JSON payload (sample fixture or upstream body) could not be
    /// parsed into the shape a workflow step needs.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// `Upstream` is special-cased: its remote status code and body pass through
/// untouched, so the local caller sees exactly what the Blip API said. All
/// other variants produce JSON in this format:
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            // Pass-through: relay the remote response as-is
            AppError::Upstream { status, body } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                return (status, Json(body)).into_response();
            }
            err @ AppError::Http(_) => (
                StatusCode::BAD_GATEWAY,
                "upstream_unreachable",
                err.to_string(),
            ),
            err @ AppError::MissingBatchId => (
                StatusCode::BAD_GATEWAY,
                "missing_batch_id",
                err.to_string(),
            ),
            err @ AppError::ProcessingTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "processing_timeout",
                err.to_string(),
            ),
            err @ (AppError::SampleData(_) | AppError::NoSampleEndusers) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "sample_data_error",
                err.to_string(),
            ),
            err @ AppError::Json(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "invalid_payload",
                err.to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
