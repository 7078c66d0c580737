//! Shared HTTP client for the Blip API.
//!
//! This module provides:
//! - `BlipClient`: a reqwest client pre-configured with the API key header
//!   and base URL, shared across all handlers via Axum state
//! - `RelayResponse`: a captured upstream status + JSON body that can be
//!   returned directly from a handler, relaying the remote answer verbatim

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{config::Config, error::AppError};

/// Per-request timeout for calls to the Blip API.
///
/// Prevents a single hung upstream call from pinning a handler forever.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// A captured response from the Blip API.
///
/// Holds the remote status code and parsed JSON body. Implements
/// `IntoResponse` so relay handlers can return it directly, which is how
/// every route propagates the upstream status unchanged (2xx and non-2xx
/// alike).
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RelayResponse {
    /// Whether the upstream answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Convert a non-success response into `AppError::Upstream`, carrying
    /// the remote status and body.
    ///
    /// Multi-step routes use this to stop at the first failed call and
    /// relay that call's response instead of continuing on bad data.
    pub fn require_success(self) -> Result<Self, AppError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AppError::Upstream {
                status: self.status.as_u16(),
                body: self.body,
            })
        }
    }

    /// Deserialize the body into a typed view.
    ///
    /// Used by workflow steps that need one or two fields (batch_id, item
    /// oids) out of an otherwise opaque remote payload.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// HTTP client for the Blip API.
///
/// Wraps a shared `reqwest::Client` that sends the configured `X-API-Key`
/// header on every request. Cloning is cheap (reqwest clients are internally
/// reference-counted), so the router clones one instance into each handler.
#[derive(Debug, Clone)]
pub struct BlipClient {
    http: reqwest::Client,
    base_url: String,
}

impl BlipClient {
    /// Build a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key contains bytes that cannot appear in
    /// an HTTP header, or if the underlying client cannot be constructed.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut api_key =
            reqwest::header::HeaderValue::from_str(&config.blip_api_key)?;
        api_key.set_sensitive(true);
        headers.insert("X-API-Key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    /// GET a path from the Blip API.
    pub async fn get(&self, path: &str) -> Result<RelayResponse, AppError> {
        self.get_query(path, &[]).await
    }

    /// GET a path with query parameters (e.g. `batch_id`, `enduser_oid`).
    pub async fn get_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<RelayResponse, AppError> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await?;
        Self::capture(response).await
    }

    /// POST a JSON body to the Blip API.
    pub async fn post_json(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<RelayResponse, AppError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::capture(response).await
    }

    /// DELETE a path on the Blip API, with no request body.
    pub async fn delete(&self, path: &str) -> Result<RelayResponse, AppError> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::capture(response).await
    }

    /// DELETE with a JSON body (the bulk enduser delete takes a list of
    /// origin IDs in the body).
    pub async fn delete_json(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<RelayResponse, AppError> {
        let response = self.http.delete(self.url(path)).json(body).send().await?;
        Self::capture(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Capture the upstream status and body.
    ///
    /// Bodies that are not valid JSON (e.g. an HTML gateway error page) are
    /// preserved as a JSON string so the caller still sees them.
    async fn capture(response: reqwest::Response) -> Result<RelayResponse, AppError> {
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let text = response.text().await?;

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(RelayResponse { status, body })
    }
}
