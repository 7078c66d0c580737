//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives the shared Blip client via Axum state
//! 2. Asks a service to perform the upstream call(s)
//! 3. Relays the upstream response (or an aggregated summary) to the caller

/// Bill relay endpoints
pub mod bills;
/// Enduser relay endpoints
pub mod endusers;
/// Liveness endpoints
pub mod health;
/// Transaction relay endpoints
pub mod transactions;
/// Workflow and reset endpoints
pub mod workflow;
