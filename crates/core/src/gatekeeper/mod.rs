//! Entitlement gate in front of the ledger write.

pub mod service;

pub use service::{GateOutcome, Gatekeeper};
