//! Subscription tier catalog.
//!
//! Static, versioned definitions of the Free, Starter, Business, and
//! Enterprise tiers: prices, feature flags, and numeric limits.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::TierCatalog;
pub use error::TierError;
pub use types::{
    BillingCycle, Feature, Quota, SyncFrequency, TierDefinition, TierFeatures, TierId,
};
