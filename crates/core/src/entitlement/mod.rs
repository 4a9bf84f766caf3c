//! Subscription entitlement.
//!
//! Combines the tier catalog, subscription lifecycle and usage meter into
//! allow/deny decisions for recording transactions, plus feature checks.

pub mod error;
pub mod resolver;
pub mod types;


pub use error::EntitlementError;
pub use resolver::EntitlementResolver;
pub use types::{Decision, Denial, DenialReason, FeatureAccess};
