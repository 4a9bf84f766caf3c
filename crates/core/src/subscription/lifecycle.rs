//! Subscription lifecycle classification.
//!
//! Every caller reasons about the same four states produced by [`resolve`],
//! instead of re-deriving them from missing records and date checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{Subscription, SubscriptionStatus};
use crate::tier::TierId;

/// Evaluated subscription state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    /// No paid subscription: no record, a free-tier record, or a payment
    /// that was never confirmed.
    Free,
    /// Paid tier within its billing period.
    Active,
    /// Paid tier within its billing period, stopping at period end.
    Cancelling,
    /// Paid tier whose billing period has lapsed.
    Expired,
}

impl SubscriptionState {
    /// Returns true while a paid tier is in force.
    #[must_use]
    pub const fn is_paying(self) -> bool {
        matches!(self, Self::Active | Self::Cancelling)
    }
}

/// Resolved lifecycle of an account's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleStatus {
    /// Evaluated state.
    pub state: SubscriptionState,
    /// Tier to display. An expired subscription still shows its paid tier.
    pub tier: TierId,
    /// Current period start, when a paid period exists.
    pub period_start: Option<DateTime<Utc>>,
    /// Current period end, when a paid period exists.
    pub period_end: Option<DateTime<Utc>>,
}

impl LifecycleStatus {
    /// Status of an account without a paid subscription.
    #[must_use]
    pub const fn free() -> Self {
        Self {
            state: SubscriptionState::Free,
            tier: TierId::Free,
            period_start: None,
            period_end: None,
        }
    }

    /// Tier whose features and limits apply right now.
    ///
    /// Expired subscriptions fall back to the free tier.
    #[must_use]
    pub const fn entitled_tier(&self) -> TierId {
        if self.state.is_paying() {
            self.tier
        } else {
            TierId::Free
        }
    }
}

/// Classifies a subscription record (or its absence) at `now`.
///
/// Pure: never mutates the record. A period ending exactly at `now` has lapsed.
#[must_use]
pub fn resolve(subscription: Option<&Subscription>, now: DateTime<Utc>) -> LifecycleStatus {
    let Some(sub) = subscription else {
        return LifecycleStatus::free();
    };

    if !sub.tier.is_paid() || sub.status == SubscriptionStatus::PendingPayment {
        return LifecycleStatus::free();
    }

    let state = if sub.status == SubscriptionStatus::Expired || now >= sub.current_period_end {
        SubscriptionState::Expired
    } else if sub.cancel_at_period_end || sub.status == SubscriptionStatus::Cancelling {
        SubscriptionState::Cancelling
    } else {
        SubscriptionState::Active
    };

    LifecycleStatus {
        state,
        tier: sub.tier,
        period_start: Some(sub.current_period_start),
        period_end: Some(sub.current_period_end),
    }
}
