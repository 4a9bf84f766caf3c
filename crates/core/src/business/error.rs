//! Business error types.

use monetrax_shared::AppError;
use monetrax_shared::types::AccountId;
use thiserror::Error;

use crate::store::RepositoryError;

/// Business registration errors.
#[derive(Debug, Error)]
pub enum BusinessError {
    /// The account already owns a business.
    #[error("account {0} already has a business")]
    AlreadyRegistered(AccountId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl BusinessError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyRegistered(_) => "BUSINESS_ALREADY_EXISTS",
            Self::Repository(_) => "REPOSITORY_ERROR",
        }
    }
}

impl From<BusinessError> for AppError {
    fn from(err: BusinessError) -> Self {
        match err {
            BusinessError::AlreadyRegistered(_) => Self::Conflict(err.to_string()),
            BusinessError::Repository(inner) => inner.into(),
        }
    }
}
