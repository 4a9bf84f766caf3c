//! Tier, feature, and quota types.

use monetrax_shared::types::Money;
use serde::{Deserialize, Serialize};

use super::error::TierError;

/// Subscription tier identifier. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierId {
    /// Free tier with a one-time lifetime allowance.
    Free,
    /// Entry-level paid tier.
    Starter,
    /// Mid-level paid tier.
    Business,
    /// Top paid tier with unlimited transactions.
    Enterprise,
}

impl TierId {
    /// All tiers, cheapest first.
    pub const ALL: [Self; 4] = [Self::Free, Self::Starter, Self::Business, Self::Enterprise];

    /// Wire identifier of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Business => "business",
            Self::Enterprise => "enterprise",
        }
    }

    /// Returns true for every tier except `free`.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Position in [`TierId::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Free => 0,
            Self::Starter => 1,
            Self::Business => 2,
            Self::Enterprise => 3,
        }
    }
}

impl std::fmt::Display for TierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TierId {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "starter" => Ok(Self::Starter),
            "business" => Ok(Self::Business),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(TierError::InvalidTier(other.to_string())),
        }
    }
}

/// How a subscription is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    /// Renews every calendar month.
    Monthly,
    /// Renews every twelve months.
    Yearly,
    /// Granted by an administrator; never renews on its own.
    AdminOverride,
}

impl BillingCycle {
    /// Wire identifier of the cycle.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::AdminOverride => "admin_override",
        }
    }

    /// Length of one billing period in calendar months.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Yearly | Self::AdminOverride => 12,
        }
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "admin_override" => Ok(Self::AdminOverride),
            other => Err(format!("Unknown billing cycle: {other}")),
        }
    }
}

/// A numeric limit that may be unlimited.
///
/// Serialized as an integer where `-1` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Quota {
    /// At most this many.
    Limited(u32),
    /// No limit.
    Unlimited,
}

impl Quota {
    /// Sentinel used on the wire and in storage for "unlimited".
    pub const UNLIMITED_SENTINEL: i64 = -1;

    /// Returns the numeric limit, or `None` when unlimited.
    #[must_use]
    pub const fn limit(self) -> Option<u32> {
        match self {
            Self::Limited(n) => Some(n),
            Self::Unlimited => None,
        }
    }

    /// Returns true when `used` has reached or passed the limit.
    #[must_use]
    pub fn is_reached(self, used: u64) -> bool {
        match self {
            Self::Limited(n) => used >= u64::from(n),
            Self::Unlimited => false,
        }
    }
}

impl TryFrom<i64> for Quota {
    type Error = TierError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == Self::UNLIMITED_SENTINEL {
            return Ok(Self::Unlimited);
        }
        u32::try_from(value)
            .map(Self::Limited)
            .map_err(|_| TierError::InvalidQuota(value))
    }
}

impl From<Quota> for i64 {
    fn from(quota: Quota) -> Self {
        match quota {
            Quota::Limited(n) => Self::from(n),
            Quota::Unlimited => Quota::UNLIMITED_SENTINEL,
        }
    }
}

impl std::fmt::Display for Quota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// How often linked bank accounts are synchronised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncFrequency {
    /// Bank sync not available.
    None,
    /// Once a day.
    Daily,
    /// Every hour.
    Hourly,
    /// As soon as the aggregator reports new activity.
    Realtime,
}

/// Boolean feature flags a tier may grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// AI-generated insights and categorization.
    AiInsights,
    /// Receipt scanning.
    ReceiptOcr,
    /// PDF report downloads.
    PdfReports,
    /// CSV export.
    CsvExport,
    /// Priority support queue.
    PrioritySupport,
    /// More than one user per business.
    MultiUser,
    /// User-defined transaction categories.
    CustomCategories,
}

impl Feature {
    /// All feature flags.
    pub const ALL: [Self; 7] = [
        Self::AiInsights,
        Self::ReceiptOcr,
        Self::PdfReports,
        Self::CsvExport,
        Self::PrioritySupport,
        Self::MultiUser,
        Self::CustomCategories,
    ];

    /// Wire name of the feature.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AiInsights => "ai_insights",
            Self::ReceiptOcr => "receipt_ocr",
            Self::PdfReports => "pdf_reports",
            Self::CsvExport => "csv_export",
            Self::PrioritySupport => "priority_support",
            Self::MultiUser => "multi_user",
            Self::CustomCategories => "custom_categories",
        }
    }

    /// Parses a feature name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limits and feature flags bundled with a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierFeatures {
    /// Transactions allowed per counting window.
    pub transactions_per_period: Quota,
    /// AI insights.
    pub ai_insights: bool,
    /// Receipt OCR.
    pub receipt_ocr: bool,
    /// PDF reports.
    pub pdf_reports: bool,
    /// CSV export.
    pub csv_export: bool,
    /// Priority support.
    pub priority_support: bool,
    /// Multiple users.
    pub multi_user: bool,
    /// Custom categories.
    pub custom_categories: bool,
    /// Number of bank accounts that may be linked.
    pub linked_bank_accounts: Quota,
    /// Automatic bank sync cadence.
    pub sync_frequency: SyncFrequency,
    /// Manual bank syncs allowed per day.
    pub manual_sync_per_day: Quota,
}

impl TierFeatures {
    /// Returns whether the flag is enabled.
    #[must_use]
    pub const fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::AiInsights => self.ai_insights,
            Feature::ReceiptOcr => self.receipt_ocr,
            Feature::PdfReports => self.pdf_reports,
            Feature::CsvExport => self.csv_export,
            Feature::PrioritySupport => self.priority_support,
            Feature::MultiUser => self.multi_user,
            Feature::CustomCategories => self.custom_categories,
        }
    }

    /// Looks up a flag by name, failing closed for unknown names.
    #[must_use]
    pub fn has_named(&self, name: &str) -> bool {
        Feature::from_name(name).is_some_and(|feature| self.has(feature))
    }
}

/// A subscription plan: price plus features and limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDefinition {
    /// Tier identifier.
    pub id: TierId,
    /// Display name.
    pub name: String,
    /// Price per month.
    pub price_monthly: Money,
    /// Price per year.
    pub price_yearly: Money,
    /// Features and limits.
    pub features: TierFeatures,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("free", TierId::Free)]
    #[case("starter", TierId::Starter)]
    #[case("business", TierId::Business)]
    #[case("enterprise", TierId::Enterprise)]
    fn test_tier_id_parses(#[case] raw: &str, #[case] expected: TierId) {
        assert_eq!(TierId::from_str(raw).unwrap(), expected);
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    #[case("gold")]
    #[case("Free")]
    #[case("")]
    fn test_unknown_tier_is_invalid(#[case] raw: &str) {
        assert_eq!(
            TierId::from_str(raw),
            Err(TierError::InvalidTier(raw.to_string()))
        );
    }

    #[test]
    fn test_quota_from_sentinel() {
        assert_eq!(Quota::try_from(-1).unwrap(), Quota::Unlimited);
        assert_eq!(Quota::try_from(0).unwrap(), Quota::Limited(0));
        assert_eq!(Quota::try_from(50).unwrap(), Quota::Limited(50));
        assert_eq!(Quota::try_from(-2), Err(TierError::InvalidQuota(-2)));
    }

    #[test]
    fn test_quota_serde_uses_sentinel() {
        assert_eq!(serde_json::to_string(&Quota::Unlimited).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&Quota::Limited(200)).unwrap(), "200");
        assert_eq!(
            serde_json::from_str::<Quota>("-1").unwrap(),
            Quota::Unlimited
        );
        assert!(serde_json::from_str::<Quota>("-5").is_err());
    }

    #[test]
    fn test_quota_is_reached() {
        assert!(!Quota::Limited(50).is_reached(49));
        assert!(Quota::Limited(50).is_reached(50));
        assert!(Quota::Limited(50).is_reached(51));
        assert!(!Quota::Unlimited.is_reached(u64::MAX));
    }

    #[test]
    fn test_feature_names_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_name(feature.as_str()), Some(feature));
        }
        assert_eq!(Feature::from_name("nonexistent_feature"), None);
        assert_eq!(Feature::from_name("AI_INSIGHTS"), None);
    }

    #[test]
    fn test_billing_cycle_months() {
        assert_eq!(BillingCycle::Monthly.months(), 1);
        assert_eq!(BillingCycle::Yearly.months(), 12);
        assert_eq!(
            BillingCycle::from_str("admin_override").unwrap(),
            BillingCycle::AdminOverride
        );
    }
}
