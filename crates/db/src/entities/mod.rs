//! `SeaORM` entity definitions.
//!
//! Enumerated columns (tier, status, billing cycle, transaction type) are
//! stored as text and parsed into core types by the repositories.

#![allow(missing_docs)]

pub mod businesses;
pub mod payment_transactions;
pub mod subscriptions;
pub mod transactions;
