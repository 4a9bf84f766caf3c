//! Entitlement error types.

use monetrax_shared::AppError;
use monetrax_shared::types::{AccountId, BusinessId};
use thiserror::Error;

use crate::store::RepositoryError;

/// Failures while evaluating entitlement.
///
/// Refusals are not errors; see [`super::Decision`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntitlementError {
    /// A store read or write failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The acting account does not own the business. Subscriptions and
    /// payments are read for the owner, so no decision is made.
    #[error("account {account_id} does not own business {business_id}")]
    NotBusinessOwner {
        /// Business the write targeted.
        business_id: BusinessId,
        /// Account that asked.
        account_id: AccountId,
    },
}

impl EntitlementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(_) => "REPOSITORY_ERROR",
            Self::NotBusinessOwner { .. } => "NOT_BUSINESS_OWNER",
        }
    }
}

impl From<EntitlementError> for AppError {
    fn from(err: EntitlementError) -> Self {
        match err {
            EntitlementError::Repository(inner) => inner.into(),
            EntitlementError::NotBusinessOwner { .. } => Self::Forbidden(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_business_owner_is_forbidden() {
        let err = EntitlementError::NotBusinessOwner {
            business_id: BusinessId::new(),
            account_id: AccountId::new(),
        };
        assert_eq!(err.error_code(), "NOT_BUSINESS_OWNER");
        let app: AppError = err.into();
        assert_eq!(app.status_code(), 403);
    }
}
