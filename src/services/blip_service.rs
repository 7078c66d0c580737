//! Per-entity operations against the Blip API.
//!
//! Each function maps to one remote endpoint (or one list-then-delete loop)
//! and relays the upstream response. Create and bulk-delete operations
//! replay the bundled sample fixtures; nothing here persists anything
//! locally.

use serde_json::{Value, json};
use tokio::time::sleep;

use crate::{
    client::{BlipClient, RelayResponse},
    error::AppError,
    models::{bill::Bill, page::Page, transaction::Transaction},
    samples,
};

/// Pause between successive per-item delete calls, to avoid flooding the
/// Blip API.
const DELETE_PACING: std::time::Duration = std::time::Duration::from_millis(400);

/// Fetch all endusers scoped to the configured API key.
///
/// Relays `GET /endusers`; the body is a paginated `{"items": [...]}`
/// envelope.
pub async fn get_endusers(client: &BlipClient) -> Result<RelayResponse, AppError> {
    client.get("/endusers").await
}

/// Create the endusers from the sample fixture.
///
/// Endusers are keyed by origin ID, so replaying the same fixture twice
/// must not create duplicates (idempotence is enforced by the remote API).
pub async fn create_sample_endusers(
    client: &BlipClient,
) -> Result<RelayResponse, AppError> {
    let endusers = samples::sample_endusers().await?;
    client.post_json("/endusers", &endusers).await
}

/// Delete the endusers from the sample fixture.
///
/// The bulk delete endpoint takes a JSON list of origin IDs in the request
/// body.
pub async fn delete_sample_endusers(
    client: &BlipClient,
) -> Result<RelayResponse, AppError> {
    let oids = samples::sample_enduser_oids().await?;
    client.delete_json("/endusers", &json!(oids)).await
}

/// Fetch all transactions scoped to the configured API key.
pub async fn get_transactions(client: &BlipClient) -> Result<RelayResponse, AppError> {
    client.get("/transactions").await
}

/// Create the transactions from the sample fixture.
///
/// A successful response carries the `batch_id` used to poll processing
/// status.
pub async fn create_sample_transactions(
    client: &BlipClient,
) -> Result<RelayResponse, AppError> {
    let transactions = samples::sample_transactions().await?;
    client.post_json("/transactions", &transactions).await
}

/// Fetch the transactions belonging to one batch.
pub async fn get_transactions_for_batch(
    client: &BlipClient,
    batch_id: &str,
) -> Result<RelayResponse, AppError> {
    client
        .get_query("/transactions", &[("batch_id", batch_id)])
        .await
}

/// Fetch the processing status of one batch.
pub async fn get_batch_status(
    client: &BlipClient,
    batch_id: &str,
) -> Result<RelayResponse, AppError> {
    client
        .get_query("/transactions/status", &[("batch_id", batch_id)])
        .await
}

/// Delete every transaction currently visible upstream, one at a time.
///
/// Lists the remote transactions, then issues one `DELETE
/// /transactions/{oid}` per item with a pacing delay between calls. Stops
/// at the first failed call and relays that call's response.
pub async fn delete_all_transactions(
    client: &BlipClient,
) -> Result<Vec<Value>, AppError> {
    let listing = get_transactions(client).await?.require_success()?;
    let page: Page<Transaction> = listing.parse()?;

    let mut deleted = Vec::with_capacity(page.items.len());
    for transaction in &page.items {
        let response = client
            .delete(&format!("/transactions/{}", transaction.oid))
            .await?
            .require_success()?;
        deleted.push(response.body);
        sleep(DELETE_PACING).await;
    }

    Ok(deleted)
}

/// Fetch all identified bills scoped to the configured API key.
pub async fn get_bills(client: &BlipClient) -> Result<RelayResponse, AppError> {
    client.get("/bills").await
}

/// Fetch the bills identified for one enduser.
pub async fn get_bills_for_enduser(
    client: &BlipClient,
    enduser_oid: &str,
) -> Result<RelayResponse, AppError> {
    client
        .get_query("/bills", &[("enduser_oid", enduser_oid)])
        .await
}

/// Delete every bill currently visible upstream, one at a time.
///
/// Same shape as [`delete_all_transactions`], except bills are addressed by
/// their Blip-assigned `id` rather than an origin ID.
pub async fn delete_all_bills(client: &BlipClient) -> Result<Vec<Value>, AppError> {
    let listing = get_bills(client).await?.require_success()?;
    let page: Page<Bill> = listing.parse()?;

    let mut deleted = Vec::with_capacity(page.items.len());
    for bill in &page.items {
        let response = client
            .delete(&format!("/bills/{}", bill.id))
            .await?
            .require_success()?;
        deleted.push(response.body);
        sleep(DELETE_PACING).await;
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> BlipClient {
        let config = envy::from_iter::<_, Config>(vec![
            ("BLIP_API_KEY".to_string(), "test-key".to_string()),
            ("BLIP_API_URL".to_string(), base_url.to_string()),
        ])
        .unwrap();
        BlipClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn delete_all_bills_deletes_each_listed_bill() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bills"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{"id": "bill-1"}, {"id": "bill-2"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/bills/bill-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "bill-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/bills/bill-2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "bill-2"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let deleted = delete_all_bills(&test_client(&server.uri())).await.unwrap();

        assert_eq!(deleted.len(), 2);
        assert_eq!(deleted[0]["id"], "bill-1");
        assert_eq!(deleted[1]["id"], "bill-2");
    }

    #[tokio::test]
    async fn delete_all_transactions_stops_on_failed_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/transactions"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"detail": "unauthorized"})),
            )
            .mount(&server)
            .await;

        let result = delete_all_transactions(&test_client(&server.uri())).await;

        match result {
            Err(AppError::Upstream { status, .. }) => assert_eq!(status, 401),
            other => panic!("expected Upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_listing_deletes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/transactions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})),
            )
            .mount(&server)
            .await;

        let deleted = delete_all_transactions(&test_client(&server.uri()))
            .await
            .unwrap();
        assert!(deleted.is_empty());
    }
}
