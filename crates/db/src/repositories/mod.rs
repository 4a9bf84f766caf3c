//! Repository implementations of the core store traits.
//!
//! Repositories hide the `SeaORM` details from the engine. Database errors and
//! rows that fail to parse both surface as `RepositoryError`.

pub mod business;
pub mod payment;
pub mod subscription;
pub mod transaction;

pub use business::BusinessRepository;
pub use payment::PaymentRepository;
pub use subscription::SubscriptionRepository;
pub use transaction::TransactionRepository;

use std::fmt::Display;
use std::str::FromStr;

use monetrax_core::store::RepositoryError;
use sea_orm::DbErr;

fn db_error(err: DbErr) -> RepositoryError {
    tracing::error!(error = %err, "Database error");
    RepositoryError::new(err.to_string())
}

fn parse_column<T>(column: &str, value: &str) -> Result<T, RepositoryError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|e: T::Err| {
        tracing::error!(column, value, error = %e, "Unparseable column value");
        RepositoryError::new(format!("invalid {column} '{value}': {e}"))
    })
}
