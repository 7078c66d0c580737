//! Liveness endpoints.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Hello-world root handler, kept as the quickstart's first endpoint to hit.
pub async fn hello_world() -> Json<Value> {
    Json(json!({"Hello": "World"}))
}

/// Health check handler.
///
/// Does not call the Blip API; reports only process liveness and the
/// current server timestamp.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}
