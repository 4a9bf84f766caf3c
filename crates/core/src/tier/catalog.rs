//! Immutable tier catalog.
//!
//! The catalog is built once at process start and shared read-only (usually
//! behind an `Arc`). There is no way to mutate a catalog after construction.

use monetrax_shared::types::Money;
use rust_decimal::Decimal;

use super::error::TierError;
use super::types::{BillingCycle, Feature, Quota, SyncFrequency, TierDefinition, TierFeatures, TierId};

/// Yearly price is ten monthly payments.
const YEARLY_PRICE_MONTHS: u32 = 10;

/// The complete set of tier definitions, one per [`TierId`].
///
/// Every catalog carries a version label. Prices and limits never change
/// under a published label; a repricing ships as a new version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierCatalog {
    version: String,
    tiers: [TierDefinition; 4],
}

impl TierCatalog {
    /// Version label of [`TierCatalog::standard`].
    pub const STANDARD_VERSION: &'static str = "2026-01";

    /// Builds the standard Monetrax catalog.
    ///
    /// | Tier | NGN/month | Transactions | AI | OCR | PDF | CSV | Banks |
    /// |------|-----------|--------------|----|-----|-----|-----|-------|
    /// | Free | 0 | 50 lifetime | No | No | No | Yes | 0 |
    /// | Starter | 5,000 | 200/month | No | Yes | Yes | Yes | 1 |
    /// | Business | 10,000 | 1,000/month | Yes | Yes | Yes | Yes | 3 |
    /// | Enterprise | 20,000 | Unlimited | Yes | Yes | Yes | Yes | Unlimited |
    #[must_use]
    pub fn standard() -> Self {
        Self {
            version: Self::STANDARD_VERSION.to_string(),
            tiers: [
                Self::definition(
                    TierId::Free,
                    "Free",
                    Decimal::ZERO,
                    TierFeatures {
                        transactions_per_period: Quota::Limited(50),
                        ai_insights: false,
                        receipt_ocr: false,
                        pdf_reports: false,
                        csv_export: true,
                        priority_support: false,
                        multi_user: false,
                        custom_categories: false,
                        linked_bank_accounts: Quota::Limited(0),
                        sync_frequency: SyncFrequency::None,
                        manual_sync_per_day: Quota::Limited(0),
                    },
                ),
                Self::definition(
                    TierId::Starter,
                    "Starter",
                    Decimal::from(5_000),
                    TierFeatures {
                        transactions_per_period: Quota::Limited(200),
                        ai_insights: false,
                        receipt_ocr: true,
                        pdf_reports: true,
                        csv_export: true,
                        priority_support: false,
                        multi_user: false,
                        custom_categories: true,
                        linked_bank_accounts: Quota::Limited(1),
                        sync_frequency: SyncFrequency::Daily,
                        manual_sync_per_day: Quota::Limited(3),
                    },
                ),
                Self::definition(
                    TierId::Business,
                    "Business",
                    Decimal::from(10_000),
                    TierFeatures {
                        transactions_per_period: Quota::Limited(1_000),
                        ai_insights: true,
                        receipt_ocr: true,
                        pdf_reports: true,
                        csv_export: true,
                        priority_support: true,
                        multi_user: true,
                        custom_categories: true,
                        linked_bank_accounts: Quota::Limited(3),
                        sync_frequency: SyncFrequency::Hourly,
                        manual_sync_per_day: Quota::Limited(10),
                    },
                ),
                Self::definition(
                    TierId::Enterprise,
                    "Enterprise",
                    Decimal::from(20_000),
                    TierFeatures {
                        transactions_per_period: Quota::Unlimited,
                        ai_insights: true,
                        receipt_ocr: true,
                        pdf_reports: true,
                        csv_export: true,
                        priority_support: true,
                        multi_user: true,
                        custom_categories: true,
                        linked_bank_accounts: Quota::Unlimited,
                        sync_frequency: SyncFrequency::Realtime,
                        manual_sync_per_day: Quota::Unlimited,
                    },
                ),
            ],
        }
    }

    fn definition(
        id: TierId,
        name: &str,
        monthly: Decimal,
        features: TierFeatures,
    ) -> TierDefinition {
        let price_monthly = Money::ngn(monthly);
        TierDefinition {
            id,
            name: name.to_string(),
            price_monthly,
            price_yearly: price_monthly.times(YEARLY_PRICE_MONTHS),
            features,
        }
    }

    /// Builds a catalog from explicit definitions under a version label.
    ///
    /// # Errors
    ///
    /// Returns `TierError::DuplicateTier` if a tier appears twice and
    /// `TierError::MissingTier` if any tier is absent.
    pub fn from_definitions(
        version: impl Into<String>,
        definitions: impl IntoIterator<Item = TierDefinition>,
    ) -> Result<Self, TierError> {
        let mut slots: [Option<TierDefinition>; 4] = [None, None, None, None];

        for definition in definitions {
            let slot = &mut slots[definition.id.index()];
            if slot.is_some() {
                return Err(TierError::DuplicateTier(definition.id));
            }
            *slot = Some(definition);
        }

        match slots {
            [Some(free), Some(starter), Some(business), Some(enterprise)] => Ok(Self {
                version: version.into(),
                tiers: [free, starter, business, enterprise],
            }),
            [free, starter, business, _] => {
                let missing = if free.is_none() {
                    TierId::Free
                } else if starter.is_none() {
                    TierId::Starter
                } else if business.is_none() {
                    TierId::Business
                } else {
                    TierId::Enterprise
                };
                Err(TierError::MissingTier(missing))
            }
        }
    }

    /// Version label of this catalog.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the definition for a tier.
    #[must_use]
    pub fn get(&self, tier: TierId) -> &TierDefinition {
        &self.tiers[tier.index()]
    }

    /// Looks up a tier by its identifier string.
    ///
    /// # Errors
    ///
    /// Returns `TierError::InvalidTier` for an unrecognized identifier.
    pub fn lookup(&self, tier: &str) -> Result<&TierDefinition, TierError> {
        Ok(self.get(tier.parse()?))
    }

    /// Iterates all tiers, cheapest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TierDefinition> {
        self.tiers.iter()
    }

    /// Returns the cheapest tier that grants a feature.
    #[must_use]
    pub fn cheapest_with(&self, feature: Feature) -> Option<TierId> {
        self.iter()
            .find(|tier| tier.features.has(feature))
            .map(|tier| tier.id)
    }

    /// Price of one billing period for checkout.
    ///
    /// # Errors
    ///
    /// Returns `TierError::NotPurchasable` for the free tier and for the
    /// admin-override cycle.
    pub fn quote(&self, tier: TierId, cycle: BillingCycle) -> Result<Money, TierError> {
        let definition = self.get(tier);
        match cycle {
            _ if !tier.is_paid() => Err(TierError::NotPurchasable(tier)),
            BillingCycle::Monthly => Ok(definition.price_monthly),
            BillingCycle::Yearly => Ok(definition.price_yearly),
            BillingCycle::AdminOverride => Err(TierError::NotPurchasable(tier)),
        }
    }
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
