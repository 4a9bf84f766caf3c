//! Persistence contracts consumed by the engine.
//!
//! These traits are implemented by the db crate. The engine only reads
//! through them when deciding entitlement; the single write it performs is
//! `LedgerStore::insert_transaction` after an allow decision.

use std::future::Future;

use chrono::{DateTime, Utc};
use monetrax_shared::AppError;
use monetrax_shared::types::{AccountId, BusinessId};
use thiserror::Error;

use crate::business::Business;
use crate::ledger::{DateRange, NewTransaction, Transaction};
use crate::subscription::Subscription;

/// A store read or write failed.
///
/// Not retried by the engine; the message is for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("repository error: {0}")]
pub struct RepositoryError(pub String);

impl RepositoryError {
    /// Creates a repository error from any message.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self::Database(err.0)
    }
}

/// Read access to a business's transactions, plus the post-allow insert.
pub trait LedgerStore: Send + Sync {
    /// Counts transactions, optionally only those created at or after
    /// `created_since`. The occurrence date is caller-supplied and is not
    /// used for quota windows.
    fn count_transactions(
        &self,
        business_id: BusinessId,
        created_since: Option<DateTime<Utc>>,
    ) -> impl Future<Output = Result<u64, RepositoryError>> + Send;

    /// Lists transactions, optionally restricted to a date range.
    fn list_transactions(
        &self,
        business_id: BusinessId,
        range: Option<DateRange>,
    ) -> impl Future<Output = Result<Vec<Transaction>, RepositoryError>> + Send;

    /// Persists a new transaction.
    fn insert_transaction(
        &self,
        transaction: NewTransaction,
    ) -> impl Future<Output = Result<Transaction, RepositoryError>> + Send;
}

/// Read access to subscription records.
pub trait SubscriptionStore: Send + Sync {
    /// Returns the account's current subscription record, if any.
    fn get_subscription(
        &self,
        account_id: AccountId,
    ) -> impl Future<Output = Result<Option<Subscription>, RepositoryError>> + Send;
}

/// Read access to payment history.
pub trait PaymentStore: Send + Sync {
    /// Returns true if the account ever completed a paid checkout.
    fn has_completed_payment(
        &self,
        account_id: AccountId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send;
}

/// Business records, one per owning account.
pub trait BusinessStore: Send + Sync {
    /// Finds the business owned by an account.
    fn find_by_owner(
        &self,
        owner_id: AccountId,
    ) -> impl Future<Output = Result<Option<Business>, RepositoryError>> + Send;

    /// Persists a new business.
    fn insert_business(
        &self,
        business: Business,
    ) -> impl Future<Output = Result<Business, RepositoryError>> + Send;
}
