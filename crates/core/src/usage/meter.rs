//! Transaction usage counting.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Days, NaiveTime, Utc};
use monetrax_shared::types::BusinessId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::{LedgerStore, RepositoryError};
use crate::tier::{Quota, TierDefinition, TierId};

/// Counting window for a usage figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageKind {
    /// Every transaction ever recorded. Never resets.
    Total,
    /// Transactions created in the current calendar month.
    Monthly,
}

impl UsageKind {
    /// Counting window implied by a tier: lifetime for free, monthly for paid.
    #[must_use]
    pub const fn for_tier(tier: TierId) -> Self {
        if tier.is_paid() {
            Self::Monthly
        } else {
            Self::Total
        }
    }
}

/// A usage count and its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCount {
    /// Transactions counted.
    pub count: u64,
    /// Counting window.
    pub kind: UsageKind,
}

/// Usage against a tier's transaction limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageReport {
    /// Tier measured against.
    pub tier: TierId,
    /// Tier display name.
    pub tier_name: String,
    /// Counting window.
    pub kind: UsageKind,
    /// Transactions counted.
    pub used: u64,
    /// Tier limit.
    pub limit: Quota,
    /// Transactions left; `None` when unlimited.
    pub remaining: Option<u64>,
    /// Share of the limit used, in percent to 2 dp. Zero when unlimited.
    pub usage_percentage: Decimal,
    /// Whether the limit has been reached.
    pub limit_exceeded: bool,
}

/// Midnight UTC on the first day of the calendar month containing `now`.
#[must_use]
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    (today - Days::new(u64::from(today.day0())))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Counts a business's transactions over the window its tier implies.
pub struct UsageMeter<L: LedgerStore> {
    ledger: Arc<L>,
}

impl<L: LedgerStore> UsageMeter<L> {
    /// Create a new usage meter.
    #[must_use]
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Counts usage for a business on the given tier.
    ///
    /// Free counts the lifetime total; paid tiers count transactions created
    /// on or after the first of the current month, whatever date they carry.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the count fails.
    pub async fn count_usage(
        &self,
        business_id: BusinessId,
        tier: TierId,
        now: DateTime<Utc>,
    ) -> Result<UsageCount, RepositoryError> {
        let kind = UsageKind::for_tier(tier);
        let since = match kind {
            UsageKind::Total => None,
            UsageKind::Monthly => Some(month_start(now)),
        };

        let count = self
            .ledger
            .count_transactions(business_id, since)
            .await
            .inspect_err(|e| {
                tracing::error!(business_id = %business_id, error = %e, "Failed to count usage");
            })?;

        tracing::debug!(business_id = %business_id, tier = %tier, count, ?kind, "Counted usage");
        Ok(UsageCount { count, kind })
    }

    /// Usage against a tier's limit.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the count fails.
    pub async fn report(
        &self,
        business_id: BusinessId,
        tier: &TierDefinition,
        now: DateTime<Utc>,
    ) -> Result<UsageReport, RepositoryError> {
        let usage = self.count_usage(business_id, tier.id, now).await?;
        Ok(build_report(tier, usage))
    }
}

fn build_report(tier: &TierDefinition, usage: UsageCount) -> UsageReport {
    let limit = tier.features.transactions_per_period;
    let (remaining, usage_percentage) = match limit.limit() {
        None => (None, Decimal::ZERO),
        Some(0) => (Some(0), Decimal::ONE_HUNDRED),
        Some(max) => {
            let max = u64::from(max);
            let pct = Decimal::from(usage.count) * Decimal::ONE_HUNDRED / Decimal::from(max);
            (Some(max.saturating_sub(usage.count)), pct.round_dp(2))
        }
    };

    UsageReport {
        tier: tier.id,
        tier_name: tier.name.clone(),
        kind: usage.kind,
        used: usage.count,
        limit,
        remaining,
        usage_percentage,
        limit_exceeded: limit.is_reached(usage.count),
    }
}
