//! Multi-step sequences: the end-to-end workflow, batch polling, and reset.
//!
//! These are the routes where one local request fans into a chain of
//! upstream calls. The chain is strictly sequential; the first failed call
//! aborts it and its response is what the local caller sees.

use serde_json::{Value, json};
use tokio::time::sleep;

use crate::{
    client::{BlipClient, RelayResponse},
    error::AppError,
    models::transaction::{BatchStatus, CreatedBatch},
    samples,
    services::blip_service,
};

/// How long to wait between batch-status polls.
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);

/// How many times to poll before giving up on the batch.
const MAX_POLL_ATTEMPTS: u32 = 10;

/// Poll the Blip API until a transaction batch reports `complete`.
///
/// Polls up to [`MAX_POLL_ATTEMPTS`] times, [`POLL_INTERVAL`] apart. An
/// exhausted window is an explicit `ProcessingTimeout` error, never a
/// silent success on stale data.
pub async fn await_processed_transactions(
    client: &BlipClient,
    batch_id: &str,
) -> Result<RelayResponse, AppError> {
    poll_batch(client, batch_id, MAX_POLL_ATTEMPTS, POLL_INTERVAL).await
}

async fn poll_batch(
    client: &BlipClient,
    batch_id: &str,
    max_attempts: u32,
    interval: std::time::Duration,
) -> Result<RelayResponse, AppError> {
    for attempt in 1..=max_attempts {
        tracing::info!(
            batch_id,
            "({attempt}/{max_attempts}) awaiting transaction processing"
        );

        let response = blip_service::get_batch_status(client, batch_id)
            .await?
            .require_success()?;
        let status: BatchStatus = response.parse()?;

        if status.is_complete() {
            return Ok(response);
        }

        tracing::info!(
            status = status.status.as_deref().unwrap_or("unknown"),
            "batch not complete, sleeping {interval:?}"
        );
        sleep(interval).await;
    }

    Err(AppError::ProcessingTimeout)
}

/// Execute the automated quickstart workflow:
///
/// 1. Create the sample endusers
/// 2. Create the sample transactions, capturing the returned `batch_id`
/// 3. Poll until the batch finishes processing
/// 4. Fetch the processed transactions for the batch
/// 5. Return the bills identified for the first sample enduser (the one
///    the recurring sample transactions belong to)
pub async fn run_workflow(client: &BlipClient) -> Result<RelayResponse, AppError> {
    let enduser_oids = samples::sample_enduser_oids().await?;
    let first_enduser = enduser_oids.first().ok_or(AppError::NoSampleEndusers)?;

    let created_endusers = blip_service::create_sample_endusers(client)
        .await?
        .require_success()?;
    tracing::info!("created enduser(s): {}", created_endusers.body);

    let created_transactions = blip_service::create_sample_transactions(client)
        .await?
        .require_success()?;
    let batch: CreatedBatch = created_transactions.parse()?;
    let batch_id = batch.batch_id.ok_or(AppError::MissingBatchId)?;
    tracing::info!(%batch_id, "created transactions");

    await_processed_transactions(client, &batch_id).await?;

    let processed = blip_service::get_transactions_for_batch(client, &batch_id)
        .await?
        .require_success()?;
    tracing::info!("processed transactions: {}", processed.body);

    blip_service::get_bills_for_enduser(client, first_enduser).await
}

/// Delete everything this quickstart created: bills, then transactions,
/// then endusers.
///
/// Ordered so derived entities go before the transactions they were
/// computed from. A dangerous route to hit against real data.
pub async fn reset(client: &BlipClient) -> Result<Value, AppError> {
    tracing::info!("deleting bills...");
    blip_service::delete_all_bills(client).await?;

    tracing::info!("deleting transactions...");
    blip_service::delete_all_transactions(client).await?;

    tracing::info!("deleting endusers...");
    blip_service::delete_sample_endusers(client)
        .await?
        .require_success()?;

    tracing::info!("done deleting everything.");
    Ok(json!({"success": true}))
}
