//! Subscription and payment records.

use chrono::{DateTime, Utc};
use monetrax_shared::types::{AccountId, Money, PaymentId, SubscriptionId};
use serde::{Deserialize, Serialize};

use crate::tier::{BillingCycle, TierId};

/// Status as stored on the subscription record.
///
/// This is an input to lifecycle resolution, not the answer: a record stored
/// as `active` whose period has ended resolves to expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Paid and in good standing.
    Active,
    /// Will not renew at period end.
    Cancelling,
    /// Checkout started but payment not confirmed.
    PendingPayment,
    /// Explicitly marked as lapsed.
    Expired,
}

impl SubscriptionStatus {
    /// Wire identifier of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelling => "cancelling",
            Self::PendingPayment => "pending_payment",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "cancelling" => Ok(Self::Cancelling),
            "pending_payment" => Ok(Self::PendingPayment),
            "expired" => Ok(Self::Expired),
            other => Err(format!("Unknown subscription status: {other}")),
        }
    }
}

/// A subscription record. At most one live record exists per account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: SubscriptionId,
    /// Owning account.
    pub account_id: AccountId,
    /// Subscribed tier.
    pub tier: TierId,
    /// Stored status.
    pub status: SubscriptionStatus,
    /// Billing cycle.
    pub billing_cycle: BillingCycle,
    /// Start of the current billing period.
    pub current_period_start: DateTime<Utc>,
    /// End of the current billing period; never before the start.
    pub current_period_end: DateTime<Utc>,
    /// Whether the subscription stops at period end.
    pub cancel_at_period_end: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Outcome of a checkout payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Checkout session created, not yet paid.
    Initiated,
    /// Payment captured.
    Completed,
    /// Payment failed or was abandoned.
    Failed,
}

impl PaymentStatus {
    /// Wire identifier of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initiated => "initiated",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initiated" => Ok(Self::Initiated),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(format!("Unknown payment status: {other}")),
        }
    }
}

/// Evidence of a checkout attempt. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Payment ID.
    pub id: PaymentId,
    /// Paying account.
    pub account_id: AccountId,
    /// Tier bought.
    pub tier: TierId,
    /// Billing cycle bought.
    pub billing_cycle: BillingCycle,
    /// Amount charged.
    pub amount: Money,
    /// Payment outcome.
    pub status: PaymentStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl PaymentRecord {
    /// Returns true if the payment was captured.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}
