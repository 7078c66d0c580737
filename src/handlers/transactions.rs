//! Transaction relay endpoints.
//!
//! - GET /transactions/get - List all transactions
//! - GET /transactions/create - Create the sample transactions
//! - GET /transactions/delete - Delete every transaction, one at a time

use axum::{Json, extract::State};
use serde_json::Value;

use crate::{
    client::{BlipClient, RelayResponse},
    error::AppError,
    services::blip_service,
};

/// List all transactions, scoped to the configured API key.
pub async fn get_transactions(
    State(client): State<BlipClient>,
) -> Result<RelayResponse, AppError> {
    blip_service::get_transactions(&client).await
}

/// Create the transactions contained in the sample transactions fixture.
///
/// A successful response carries the `batch_id` the workflow polls on.
pub async fn create_transactions(
    State(client): State<BlipClient>,
) -> Result<RelayResponse, AppError> {
    blip_service::create_sample_transactions(&client).await
}

/// Delete all transactions that were created as part of this quickstart.
///
/// The upstream delete endpoint is per-item, so this returns the list of
/// deleted transactions rather than a single relayed body.
pub async fn delete_transactions(
    State(client): State<BlipClient>,
) -> Result<Json<Vec<Value>>, AppError> {
    let deleted = blip_service::delete_all_transactions(&client).await?;
    Ok(Json(deleted))
}
