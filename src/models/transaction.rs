//! Transaction and batch-processing payload views.

use serde::Deserialize;

/// A transaction as it appears in Blip list payloads.
///
/// Transactions carry a caller-supplied `oid` like endusers do; the
/// per-item delete endpoint is addressed by it.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Caller-supplied origin ID
    pub oid: String,
}

/// Response view for `POST /transactions`.
///
/// Creating a batch of transactions yields a `batch_id` used to poll
/// processing status. The field is optional here so the workflow can turn
/// its absence into an explicit error instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreatedBatch {
    pub batch_id: Option<String>,
}

/// Response view for `GET /transactions/status?batch_id=...`.
#[derive(Debug, Deserialize)]
pub struct BatchStatus {
    pub status: Option<String>,
}

impl BatchStatus {
    /// Terminal processing state reported by the Blip API.
    pub const COMPLETE: &'static str = "complete";

    /// Whether the batch has finished processing.
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some(Self::COMPLETE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn created_batch_without_batch_id_parses_to_none() {
        let created: CreatedBatch =
            serde_json::from_value(json!({"total": 12})).unwrap();
        assert!(created.batch_id.is_none());
    }

    #[test]
    fn created_batch_with_batch_id() {
        let created: CreatedBatch =
            serde_json::from_value(json!({"total": 12, "batch_id": "batch-77"})).unwrap();
        assert_eq!(created.batch_id.as_deref(), Some("batch-77"));
    }

    #[test]
    fn batch_status_completion() {
        let pending: BatchStatus =
            serde_json::from_value(json!({"status": "processing"})).unwrap();
        let complete: BatchStatus =
            serde_json::from_value(json!({"status": "complete"})).unwrap();
        let missing: BatchStatus = serde_json::from_value(json!({})).unwrap();

        assert!(!pending.is_complete());
        assert!(complete.is_complete());
        assert!(!missing.is_complete());
    }
}
