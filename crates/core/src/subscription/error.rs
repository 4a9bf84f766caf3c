//! Subscription transition errors.

use monetrax_shared::AppError;
use thiserror::Error;

use crate::tier::TierError;

/// Errors from subscription transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    /// No paid subscription is in force.
    #[error("no active subscription")]
    NoActiveSubscription,

    /// Cancellation was already requested.
    #[error("subscription is already set to cancel at period end")]
    AlreadyCancelling,

    /// The billing period end cannot be represented.
    #[error("billing period end is out of range")]
    PeriodOutOfRange,

    /// Tier error.
    #[error(transparent)]
    Tier(#[from] TierError),
}

impl SubscriptionError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoActiveSubscription => "NO_ACTIVE_SUBSCRIPTION",
            Self::AlreadyCancelling => "ALREADY_CANCELLING",
            Self::PeriodOutOfRange => "PERIOD_OUT_OF_RANGE",
            Self::Tier(inner) => inner.error_code(),
        }
    }
}

impl From<SubscriptionError> for AppError {
    fn from(err: SubscriptionError) -> Self {
        match err {
            SubscriptionError::NoActiveSubscription => Self::NotFound(err.to_string()),
            SubscriptionError::AlreadyCancelling => Self::BusinessRule(err.to_string()),
            SubscriptionError::PeriodOutOfRange => Self::Internal(err.to_string()),
            SubscriptionError::Tier(inner) => inner.into(),
        }
    }
}
