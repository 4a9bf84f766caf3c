//! Subscription transitions.
//!
//! Each transition is a pure function from the current record to the next
//! one. Persisting the result is the caller's job (payment confirmation
//! webhook, cancellation handler, admin override).

use chrono::{DateTime, Months, Utc};
use monetrax_shared::types::{AccountId, SubscriptionId};

use super::error::SubscriptionError;
use super::lifecycle::{SubscriptionState, resolve};
use super::types::{Subscription, SubscriptionStatus};
use crate::tier::{BillingCycle, TierError, TierId};

/// Subscription transitions.
pub struct SubscriptionService;

impl SubscriptionService {
    /// End of a billing period that starts at `start`.
    ///
    /// # Errors
    ///
    /// Returns `SubscriptionError::PeriodOutOfRange` if the date overflows.
    pub fn period_end(
        start: DateTime<Utc>,
        cycle: BillingCycle,
    ) -> Result<DateTime<Utc>, SubscriptionError> {
        start
            .checked_add_months(Months::new(cycle.months()))
            .ok_or(SubscriptionError::PeriodOutOfRange)
    }

    /// Activates a paid tier after a confirmed payment.
    ///
    /// Reuses the existing record's identity so an account keeps one record.
    ///
    /// # Errors
    ///
    /// Returns `TierError::NotPurchasable` for the free tier or the
    /// admin-override cycle.
    pub fn activate(
        existing: Option<&Subscription>,
        account_id: AccountId,
        tier: TierId,
        cycle: BillingCycle,
        now: DateTime<Utc>,
    ) -> Result<Subscription, SubscriptionError> {
        if !tier.is_paid() || cycle == BillingCycle::AdminOverride {
            return Err(TierError::NotPurchasable(tier).into());
        }

        let period_end = Self::period_end(now, cycle)?;
        Ok(Self::build(existing, account_id, tier, cycle, now, period_end, now))
    }

    /// Extends a paid subscription by one billing period.
    ///
    /// An in-force subscription extends from its current period end; a lapsed
    /// one restarts at `now`.
    ///
    /// # Errors
    ///
    /// Returns `SubscriptionError::NoActiveSubscription` for a free-tier record.
    pub fn renew(
        subscription: &Subscription,
        now: DateTime<Utc>,
    ) -> Result<Subscription, SubscriptionError> {
        if !subscription.tier.is_paid() {
            return Err(SubscriptionError::NoActiveSubscription);
        }

        let start = subscription.current_period_end.max(now);
        let end = Self::period_end(start, subscription.billing_cycle)?;

        Ok(Subscription {
            status: SubscriptionStatus::Active,
            current_period_start: start,
            current_period_end: end,
            cancel_at_period_end: false,
            updated_at: now,
            ..subscription.clone()
        })
    }

    /// Requests cancellation at period end. Access continues until then.
    ///
    /// # Errors
    ///
    /// Returns `SubscriptionError::NoActiveSubscription` unless a paid tier is
    /// in force, and `SubscriptionError::AlreadyCancelling` on a repeat.
    pub fn cancel(
        subscription: &Subscription,
        now: DateTime<Utc>,
    ) -> Result<Subscription, SubscriptionError> {
        match resolve(Some(subscription), now).state {
            SubscriptionState::Active => Ok(Subscription {
                status: SubscriptionStatus::Cancelling,
                cancel_at_period_end: true,
                updated_at: now,
                ..subscription.clone()
            }),
            SubscriptionState::Cancelling => Err(SubscriptionError::AlreadyCancelling),
            SubscriptionState::Free | SubscriptionState::Expired => {
                Err(SubscriptionError::NoActiveSubscription)
            }
        }
    }

    /// Administrator tier change, bypassing checkout.
    ///
    /// A paid tier is granted for twelve months; `free` closes the period
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns `SubscriptionError::PeriodOutOfRange` if the date overflows.
    pub fn change_tier(
        existing: Option<&Subscription>,
        account_id: AccountId,
        tier: TierId,
        now: DateTime<Utc>,
    ) -> Result<Subscription, SubscriptionError> {
        let cycle = BillingCycle::AdminOverride;
        let period_end = if tier.is_paid() {
            Self::period_end(now, cycle)?
        } else {
            now
        };
        Ok(Self::build(existing, account_id, tier, cycle, now, period_end, now))
    }

    fn build(
        existing: Option<&Subscription>,
        account_id: AccountId,
        tier: TierId,
        billing_cycle: BillingCycle,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Subscription {
        Subscription {
            id: existing.map_or_else(SubscriptionId::new, |s| s.id),
            account_id,
            tier,
            status: SubscriptionStatus::Active,
            billing_cycle,
            current_period_start: period_start,
            current_period_end: period_end,
            cancel_at_period_end: false,
            created_at: existing.map_or(now, |s| s.created_at),
            updated_at: now,
        }
    }
}
