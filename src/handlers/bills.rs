//! Bill relay endpoints.
//!
//! - GET /bills/get - List all identified bills
//! - GET /bills/get/{enduser_oid} - List bills for one enduser
//! - GET /bills/delete - Delete every bill, one at a time

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{
    client::{BlipClient, RelayResponse},
    error::AppError,
    services::blip_service,
};

/// List all bills identified from this institution's transactions.
pub async fn get_bills(
    State(client): State<BlipClient>,
) -> Result<RelayResponse, AppError> {
    blip_service::get_bills(&client).await
}

/// List the bills identified for one enduser, by origin ID.
pub async fn get_bills_for_enduser(
    State(client): State<BlipClient>,
    Path(enduser_oid): Path<String>,
) -> Result<RelayResponse, AppError> {
    blip_service::get_bills_for_enduser(&client, &enduser_oid).await
}

/// Delete all bills that were identified as part of this quickstart.
pub async fn delete_bills(
    State(client): State<BlipClient>,
) -> Result<Json<Vec<Value>>, AppError> {
    let deleted = blip_service::delete_all_bills(&client).await?;
    Ok(Json(deleted))
}
