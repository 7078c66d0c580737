//! Typed views over Blip API payloads.
//!
//! The Blip API owns these entities; the relay never stores them. Each
//! struct names only the fields a workflow step has to read (origin IDs,
//! batch IDs, processing status) and ignores the rest of the payload.

/// Identified bill model
pub mod bill;
/// Enduser (consumer entity) model
pub mod enduser;
/// Paginated list envelope
pub mod page;
/// Transaction and batch-processing models
pub mod transaction;
