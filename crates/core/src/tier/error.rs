//! Tier catalog error types.

use monetrax_shared::AppError;
use thiserror::Error;

use super::types::TierId;

/// Errors raised by tier lookups and catalog construction.
///
/// These are programmer or data errors, never user-facing business outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierError {
    /// An unrecognized tier identifier was supplied.
    #[error("invalid tier: {0}")]
    InvalidTier(String),

    /// A quota value other than a non-negative integer or `-1`.
    #[error("invalid quota value: {0}")]
    InvalidQuota(i64),

    /// The same tier was defined twice.
    #[error("tier defined more than once: {0}")]
    DuplicateTier(TierId),

    /// A tier is missing from the catalog.
    #[error("tier missing from catalog: {0}")]
    MissingTier(TierId),

    /// The tier or billing cycle cannot be bought through checkout.
    #[error("tier {0} cannot be purchased with this billing cycle")]
    NotPurchasable(TierId),
}

impl TierError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTier(_) => "INVALID_TIER",
            Self::InvalidQuota(_) => "INVALID_QUOTA",
            Self::DuplicateTier(_) => "DUPLICATE_TIER",
            Self::MissingTier(_) => "MISSING_TIER",
            Self::NotPurchasable(_) => "TIER_NOT_PURCHASABLE",
        }
    }
}

impl From<TierError> for AppError {
    fn from(err: TierError) -> Self {
        match err {
            TierError::NotPurchasable(TierId::Free) => {
                Self::Validation("Free tier doesn't require payment".to_string())
            }
            TierError::NotPurchasable(_) => Self::Validation(err.to_string()),
            TierError::InvalidTier(_)
            | TierError::InvalidQuota(_)
            | TierError::DuplicateTier(_)
            | TierError::MissingTier(_) => Self::Internal(err.to_string()),
        }
    }
}
