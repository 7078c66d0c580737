//! Workflow and reset endpoints.
//!
//! - GET /workflow - Run the end-to-end quickstart workflow
//! - GET /reset - Delete everything the quickstart created

use axum::{Json, extract::State};
use serde_json::Value;

use crate::{
    client::{BlipClient, RelayResponse},
    error::AppError,
    services::workflow_service,
};

/// Run the automated quickstart workflow.
///
/// Creates the sample endusers and transactions, waits for the batch to be
/// processed, and returns the bills identified for the first sample
/// enduser. See [`workflow_service::run_workflow`] for the step sequence.
pub async fn run_workflow(
    State(client): State<BlipClient>,
) -> Result<RelayResponse, AppError> {
    workflow_service::run_workflow(&client).await
}

/// Delete all bills, transactions, and endusers created by this quickstart.
///
/// A dangerous route to hit, so be careful!
pub async fn reset(State(client): State<BlipClient>) -> Result<Json<Value>, AppError> {
    let summary = workflow_service::reset(&client).await?;
    Ok(Json(summary))
}
