//! Bill payload view.

use serde::Deserialize;

/// A bill identified by the Blip API from recurring transactions.
///
/// Bills are derived remotely and keyed by a Blip-assigned `id` (not an
/// origin ID), which the per-item delete endpoint is addressed by.
#[derive(Debug, Clone, Deserialize)]
pub struct Bill {
    pub id: String,
}
