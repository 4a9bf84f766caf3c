//! Core business logic for Monetrax.
//!
//! This crate contains the tax computation and subscription entitlement engine
//! with ZERO web or database dependencies. Persistence is reached only through
//! the traits in [`store`].
//!
//! # Modules
//!
//! - `tier` - Immutable tier catalog, features and limits
//! - `tax` - VAT, progressive income tax, readiness score, filing calendar
//! - `subscription` - Subscription lifecycle resolution and transitions
//! - `usage` - Transaction counting per tier window
//! - `entitlement` - Allow/deny decisions and feature checks
//! - `gatekeeper` - Entitlement-gated transaction recording
//! - `ledger` - Transaction records
//! - `business` - Business registration
//! - `reports` - Financial and tax summaries
//! - `store` - Persistence contracts

pub mod business;
pub mod entitlement;
pub mod gatekeeper;
pub mod ledger;
pub mod reports;
pub mod store;
pub mod subscription;
pub mod tax;
pub mod tier;
pub mod usage;

#[cfg(test)]
mod test_support;
