//! Relay business logic.
//!
//! Services contain the calls to the Blip API separated from HTTP handlers.
//! They build the outbound requests, sequence multi-step operations, and
//! decide when a failed remote call stops a chain.

pub mod blip_service;
pub mod workflow_service;
