//! Enduser payload view.

use serde::Deserialize;

/// An enduser as it appears in Blip API payloads and in the sample fixture.
///
/// Endusers are keyed by `oid` (origin ID), a caller-supplied globally
/// unique identifier that lets an institution track the same consumer
/// across platforms. The bulk delete endpoint takes a list of these, and
/// the workflow queries bills for the first sample enduser's oid, so `oid`
/// is the only field the relay ever reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Enduser {
    /// Caller-supplied origin ID
    pub oid: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_are_ignored() {
        let enduser: Enduser = serde_json::from_value(json!({
            "oid": "enduser-0001",
            "name": "Sample Person",
            "email": "sample@example.com"
        }))
        .unwrap();

        assert_eq!(enduser.oid, "enduser-0001");
    }
}
