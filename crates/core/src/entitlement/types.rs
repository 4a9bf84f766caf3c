//! Entitlement decisions.

use serde::{Deserialize, Serialize};

use crate::tier::TierId;

/// Why a gated action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The paid billing period has lapsed. Recoverable by renewal.
    SubscriptionExpired,
    /// The account has paid before and is back on the free tier.
    /// Recoverable by subscribing again.
    FreeTrialNotAvailable,
    /// The lifetime free allotment is used up.
    FreeLimitExceeded,
    /// This month's allotment for a paid tier is used up.
    MonthlyLimitExceeded,
}

impl DenialReason {
    /// Machine-readable reason code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubscriptionExpired => "subscription_expired",
            Self::FreeTrialNotAvailable => "free_trial_not_available",
            Self::FreeLimitExceeded => "free_limit_exceeded",
            Self::MonthlyLimitExceeded => "monthly_limit_exceeded",
        }
    }

    /// Message suitable for end users.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::SubscriptionExpired => {
                "Your subscription has expired. Renew to continue recording transactions."
            }
            Self::FreeTrialNotAvailable => {
                "The free plan is no longer available for this account. Subscribe to continue."
            }
            Self::FreeLimitExceeded => {
                "You have used all free transactions. Upgrade to continue recording."
            }
            Self::MonthlyLimitExceeded => {
                "You have reached this month's transaction limit. Upgrade or wait for the next month."
            }
        }
    }
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured refusal, rendered directly to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denial {
    /// Reason code.
    pub reason: DenialReason,
    /// Tier the decision was evaluated against.
    pub tier: TierId,
    /// Usage counted, for limit denials.
    pub current: Option<u64>,
    /// Tier limit, for limit denials.
    pub limit: Option<u32>,
    /// Whether buying or renewing a tier would lift the refusal.
    pub upgrade_available: bool,
}

impl Denial {
    /// Message suitable for end users.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.reason.message()
    }
}

/// Outcome of an entitlement check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// The action may proceed.
    Allowed,
    /// The action is refused.
    Denied(Denial),
}

impl Decision {
    /// Returns true if the action may proceed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the denial, if refused.
    #[must_use]
    pub const fn denial(&self) -> Option<&Denial> {
        match self {
            Self::Allowed => None,
            Self::Denied(denial) => Some(denial),
        }
    }
}

/// Feature check answer for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureAccess {
    /// Feature name as asked.
    pub feature: String,
    /// Whether the current tier grants it.
    pub has_access: bool,
    /// True when access is denied but some tier would grant it.
    pub upgrade_required: bool,
    /// Tier whose features apply right now.
    pub current_tier: TierId,
}
