//! Entitlement resolution.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use monetrax_shared::types::AccountId;

use super::error::EntitlementError;
use super::types::{Decision, Denial, DenialReason, FeatureAccess};
use crate::business::Business;
use crate::store::{LedgerStore, PaymentStore, SubscriptionStore};
use crate::subscription::{LifecycleStatus, SubscriptionState, resolve};
use crate::tier::{Feature, Quota, TierCatalog, TierId};
use crate::usage::{UsageMeter, UsageReport};

/// Decides whether an account may record transactions or use a feature.
///
/// All inputs are read fresh on every call. The usage check is
/// count-then-compare, so concurrent requests near the limit can each be
/// allowed; the limit is soft.
pub struct EntitlementResolver<L, S, P>
where
    L: LedgerStore,
    S: SubscriptionStore,
    P: PaymentStore,
{
    catalog: Arc<TierCatalog>,
    subscriptions: Arc<S>,
    payments: Arc<P>,
    meter: UsageMeter<L>,
}

impl<L, S, P> EntitlementResolver<L, S, P>
where
    L: LedgerStore,
    S: SubscriptionStore,
    P: PaymentStore,
{
    /// Create a new resolver.
    #[must_use]
    pub fn new(
        catalog: Arc<TierCatalog>,
        ledger: Arc<L>,
        subscriptions: Arc<S>,
        payments: Arc<P>,
    ) -> Self {
        Self {
            catalog,
            subscriptions,
            payments,
            meter: UsageMeter::new(ledger),
        }
    }

    /// The tier catalog this resolver evaluates against.
    #[must_use]
    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    /// Resolves an account's subscription lifecycle at `now`.
    ///
    /// # Errors
    ///
    /// Returns `EntitlementError::Repository` if the subscription read fails.
    pub async fn lifecycle(
        &self,
        account_id: AccountId,
        now: DateTime<Utc>,
    ) -> Result<LifecycleStatus, EntitlementError> {
        let subscription = self
            .subscriptions
            .get_subscription(account_id)
            .await
            .inspect_err(|e| {
                tracing::error!(account_id = %account_id, error = %e, "Failed to load subscription");
            })?;
        Ok(resolve(subscription.as_ref(), now))
    }

    /// May this business record one more transaction right now?
    ///
    /// Checks run in a fixed order and the first refusal wins:
    /// 1. an expired paid subscription
    /// 2. the free tier for an account that has paid before
    /// 3. an unlimited tier is allowed outright
    /// 4. usage at or over the tier limit
    ///
    /// # Errors
    ///
    /// Returns `EntitlementError::NotBusinessOwner` if `account_id` is not the
    /// business owner, or `EntitlementError::Repository` if any store read
    /// fails.
    pub async fn can_record_transaction(
        &self,
        business: &Business,
        account_id: AccountId,
        now: DateTime<Utc>,
    ) -> Result<Decision, EntitlementError> {
        if account_id != business.owner_id {
            tracing::warn!(
                business_id = %business.id,
                account_id = %account_id,
                "Account does not own business"
            );
            return Err(EntitlementError::NotBusinessOwner {
                business_id: business.id,
                account_id,
            });
        }

        let status = self.lifecycle(account_id, now).await?;

        if status.state == SubscriptionState::Expired {
            return Ok(Self::deny(business, Denial {
                reason: DenialReason::SubscriptionExpired,
                tier: status.tier,
                current: None,
                limit: None,
                upgrade_available: true,
            }));
        }

        let tier = status.entitled_tier();

        if tier == TierId::Free && self.has_paid_before(account_id).await? {
            return Ok(Self::deny(business, Denial {
                reason: DenialReason::FreeTrialNotAvailable,
                tier,
                current: None,
                limit: None,
                upgrade_available: true,
            }));
        }

        let Quota::Limited(limit) = self.catalog.get(tier).features.transactions_per_period else {
            tracing::debug!(business_id = %business.id, tier = %tier, "Unlimited tier, allowed");
            return Ok(Decision::Allowed);
        };

        let usage = self.meter.count_usage(business.id, tier, now).await?;
        if usage.count >= u64::from(limit) {
            let reason = if tier.is_paid() {
                DenialReason::MonthlyLimitExceeded
            } else {
                DenialReason::FreeLimitExceeded
            };
            return Ok(Self::deny(business, Denial {
                reason,
                tier,
                current: Some(usage.count),
                limit: Some(limit),
                upgrade_available: self.has_larger_allowance(limit),
            }));
        }

        tracing::debug!(
            business_id = %business.id,
            tier = %tier,
            used = usage.count,
            limit,
            "Transaction allowed"
        );
        Ok(Decision::Allowed)
    }

    /// Does the business's current tier include a feature?
    ///
    /// Unknown feature names are never granted. Expired subscriptions get the
    /// free tier's features.
    ///
    /// # Errors
    ///
    /// Returns `EntitlementError::Repository` if the subscription read fails.
    pub async fn has_feature(
        &self,
        business: &Business,
        feature: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, EntitlementError> {
        Ok(self.feature_access(business, feature, now).await?.has_access)
    }

    /// Feature check with upgrade guidance.
    ///
    /// # Errors
    ///
    /// Returns `EntitlementError::Repository` if the subscription read fails.
    pub async fn feature_access(
        &self,
        business: &Business,
        feature: &str,
        now: DateTime<Utc>,
    ) -> Result<FeatureAccess, EntitlementError> {
        let tier = self.lifecycle(business.owner_id, now).await?.entitled_tier();
        let has_access = self.catalog.get(tier).features.has_named(feature);
        let upgrade_required = !has_access
            && Feature::from_name(feature)
                .and_then(|f| self.catalog.cheapest_with(f))
                .is_some();

        if !has_access {
            tracing::debug!(business_id = %business.id, tier = %tier, feature, "Feature not granted");
        }

        Ok(FeatureAccess {
            feature: feature.to_string(),
            has_access,
            upgrade_required,
            current_tier: tier,
        })
    }

    /// Usage against the business's current tier.
    ///
    /// # Errors
    ///
    /// Returns `EntitlementError::Repository` if a store read fails.
    pub async fn usage_report(
        &self,
        business: &Business,
        now: DateTime<Utc>,
    ) -> Result<UsageReport, EntitlementError> {
        let tier = self.lifecycle(business.owner_id, now).await?.entitled_tier();
        Ok(self.meter.report(business.id, self.catalog.get(tier), now).await?)
    }

    async fn has_paid_before(&self, account_id: AccountId) -> Result<bool, EntitlementError> {
        Ok(self
            .payments
            .has_completed_payment(account_id)
            .await
            .inspect_err(|e| {
                tracing::error!(account_id = %account_id, error = %e, "Failed to load payments");
            })?)
    }

    fn has_larger_allowance(&self, limit: u32) -> bool {
        self.catalog
            .iter()
            .any(|tier| match tier.features.transactions_per_period {
                Quota::Unlimited => true,
                Quota::Limited(other) => other > limit,
            })
    }

    fn deny(business: &Business, denial: Denial) -> Decision {
        tracing::info!(
            business_id = %business.id,
            tier = %denial.tier,
            reason = %denial.reason,
            current = ?denial.current,
            limit = ?denial.limit,
            "Transaction denied"
        );
        Decision::Denied(denial)
    }
}
