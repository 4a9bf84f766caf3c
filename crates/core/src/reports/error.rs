//! Report error types.

use monetrax_shared::AppError;
use thiserror::Error;

use crate::store::RepositoryError;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Ledger read failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ReportError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(_) => "REPOSITORY_ERROR",
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Repository(inner) => inner.into(),
        }
    }
}
