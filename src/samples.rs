//! Sample data fixtures.
//!
//! The create-style routes do not take request bodies; they replay the
//! bundled JSON fixtures under `data/`. Files are read at request time
//! (async, off the runtime's blocking-sensitive path) so editing a fixture
//! takes effect without restarting the server.

use serde_json::Value;

use crate::{error::AppError, models::enduser::Enduser};

/// Bundled enduser fixture, created by `/endusers/create`.
pub const SAMPLE_ENDUSERS_PATH: &str = "data/sample_endusers.json";

/// Bundled transaction fixture, created by `/transactions/create`.
pub const SAMPLE_TRANSACTIONS_PATH: &str = "data/sample_transactions.json";

/// Read and parse the sample endusers fixture.
pub async fn sample_endusers() -> Result<Value, AppError> {
    read_fixture(SAMPLE_ENDUSERS_PATH).await
}

/// Read and parse the sample transactions fixture.
pub async fn sample_transactions() -> Result<Value, AppError> {
    read_fixture(SAMPLE_TRANSACTIONS_PATH).await
}

/// The origin IDs of the sample endusers, in fixture order.
///
/// The bulk delete endpoint takes these, and the workflow queries bills for
/// the first one (the enduser the recurring sample transactions belong to).
pub async fn sample_enduser_oids() -> Result<Vec<String>, AppError> {
    let endusers: Vec<Enduser> = serde_json::from_value(sample_endusers().await?)?;
    Ok(endusers.into_iter().map(|e| e.oid).collect())
}

async fn read_fixture(path: &str) -> Result<Value, AppError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}
