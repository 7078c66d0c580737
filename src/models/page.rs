//! Paginated list envelope used by Blip list endpoints.

use serde::Deserialize;

/// The `{"items": [...]}` envelope that every Blip list endpoint returns.
///
/// Pagination means a single page may not contain every result; the
/// quickstart only ever walks the first page, matching how the sample data
/// is sized.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
}
