//! Blip Quickstart Relay - Main Application Entry Point
//!
//! This is a small relay server for exploring the Blip financial-data API.
//! Each local route forwards one or more pre-built sample requests to the
//! Blip API and relays the raw responses back, so the whole quickstart can
//! be driven from a browser without writing any client code.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Upstream Client**: reqwest, pre-configured with the X-API-Key header
//! - **Format**: JSON requests/responses, bodies relayed verbatim
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the shared Blip API client
//! 3. Build HTTP router with the fixed route set and middleware
//! 4. Start server on configured port (20001 by default)

mod client;
mod config;
mod error;
mod handlers;
mod models;
mod samples;
mod services;

use tracing_subscriber::EnvFilter;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::client::BlipClient;

/// Build the application router.
///
/// The handler set is static: every route the quickstart exposes is wired
/// here, and nothing is configurable at runtime beyond the state baked into
/// the shared client.
fn app(client: BlipClient) -> Router {
    Router::new()
        .route("/", get(handlers::health::hello_world))
        .route("/health", get(handlers::health::health_check))
        // Enduser routes
        .route("/endusers/get", get(handlers::endusers::get_endusers))
        .route("/endusers/create", get(handlers::endusers::create_endusers))
        .route("/endusers/delete", get(handlers::endusers::delete_endusers))
        // Transaction routes
        .route(
            "/transactions/get",
            get(handlers::transactions::get_transactions),
        )
        .route(
            "/transactions/create",
            get(handlers::transactions::create_transactions),
        )
        .route(
            "/transactions/delete",
            get(handlers::transactions::delete_transactions),
        )
        // Bill routes
        .route("/bills/get", get(handlers::bills::get_bills))
        .route(
            "/bills/get/{enduser_oid}",
            get(handlers::bills::get_bills_for_enduser),
        )
        .route("/bills/delete", get(handlers::bills::delete_bills))
        // Workflow routes
        .route("/workflow", get(handlers::workflow::run_workflow))
        .route("/reset", get(handlers::workflow::reset))
        // Request tracing plus permissive CORS, so the quickstart can be
        // called from browser-hosted tooling
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        // Share the Blip client with all handlers via State extraction
        .with_state(client)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Build the shared upstream client
    let client = BlipClient::new(&config)?;
    tracing::info!("Blip API client ready for {}", config.base_url());

    let app = app(client);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_app(base_url: &str) -> Router {
        let config = envy::from_iter::<_, config::Config>(vec![
            ("BLIP_API_KEY".to_string(), "test-key".to_string()),
            ("BLIP_API_URL".to_string(), base_url.to_string()),
        ])
        .unwrap();
        app(BlipClient::new(&config).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_says_hello() {
        let (status, body) = get_json(test_app("http://unused.invalid"), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"Hello": "World"}));
    }

    #[tokio::test]
    async fn endusers_get_relays_upstream_body_and_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/endusers"))
            .and(header("X-API-Key", "test-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": [{"oid": "enduser-1"}]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = get_json(test_app(&server.uri()), "/endusers/get").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["oid"], "enduser-1");
    }

    #[tokio::test]
    async fn upstream_failure_status_passes_through_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bills"))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({"detail": "rate limited"})),
            )
            .mount(&server)
            .await;

        let (status, body) = get_json(test_app(&server.uri()), "/bills/get").await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, json!({"detail": "rate limited"}));
    }

    #[tokio::test]
    async fn bills_for_enduser_route_forwards_the_path_oid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bills"))
            .and(wiremock::matchers::query_param("enduser_oid", "enduser-7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) =
            get_json(test_app(&server.uri()), "/bills/get/enduser-7").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"items": []}));
    }

    #[tokio::test]
    async fn unreachable_upstream_surfaces_as_bad_gateway() {
        // Port 9 is discard; nothing is listening there in tests.
        let (status, body) =
            get_json(test_app("http://127.0.0.1:9"), "/transactions/get").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "upstream_unreachable");
    }
}
