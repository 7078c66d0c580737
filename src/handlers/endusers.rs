//! Enduser relay endpoints.
//!
//! - GET /endusers/get - List all endusers
//! - GET /endusers/create - Create the sample endusers
//! - GET /endusers/delete - Delete the sample endusers
//!
//! All routes are GET so the quickstart can be driven from a browser; the
//! create and delete routes replay the bundled fixture rather than taking a
//! request body.

use axum::extract::State;

use crate::{
    client::{BlipClient, RelayResponse},
    error::AppError,
    services::blip_service,
};

/// List all endusers, scoped to the configured API key.
///
/// Relays the paginated `{"items": [...]}` body from the Blip API.
pub async fn get_endusers(
    State(client): State<BlipClient>,
) -> Result<RelayResponse, AppError> {
    blip_service::get_endusers(&client).await
}

/// Create the endusers contained in the sample endusers fixture.
///
/// Running this twice does not duplicate endusers: the remote API keys them
/// by origin ID. The response carries the number of endusers created.
pub async fn create_endusers(
    State(client): State<BlipClient>,
) -> Result<RelayResponse, AppError> {
    blip_service::create_sample_endusers(&client).await
}

/// Delete the endusers contained in the sample endusers fixture.
pub async fn delete_endusers(
    State(client): State<BlipClient>,
) -> Result<RelayResponse, AppError> {
    blip_service::delete_sample_endusers(&client).await
}
