//! In-memory stores and fixtures for unit tests.

use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use monetrax_shared::types::{
    AccountId, BusinessId, Money, PaymentId, SubscriptionId, TransactionId,
};
use rust_decimal::Decimal;

use crate::business::Business;
use crate::ledger::{DateRange, NewTransaction, Transaction, TransactionType};
use crate::store::{BusinessStore, LedgerStore, PaymentStore, RepositoryError, SubscriptionStore};
use crate::subscription::{PaymentRecord, PaymentStatus, Subscription, SubscriptionStatus};
use crate::tier::{BillingCycle, TierId};

/// Midday UTC on the given date.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// An active, non-cancelling monthly subscription for a fresh account.
pub fn subscription(tier: TierId, start: DateTime<Utc>, end: DateTime<Utc>) -> Subscription {
    Subscription {
        id: SubscriptionId::new(),
        account_id: AccountId::new(),
        tier,
        status: SubscriptionStatus::Active,
        billing_cycle: BillingCycle::Monthly,
        current_period_start: start,
        current_period_end: end,
        cancel_at_period_end: false,
        created_at: start,
        updated_at: start,
    }
}

pub fn business(owner_id: AccountId) -> Business {
    Business {
        id: BusinessId::new(),
        owner_id,
        name: "Ade Fashion Store".to_string(),
        business_type: None,
        tin: None,
        created_at: at(2025, 1, 1),
    }
}

pub fn transaction(
    business_id: BusinessId,
    transaction_type: TransactionType,
    amount: Decimal,
    occurred_on: NaiveDate,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        business_id,
        transaction_type,
        category: "General".to_string(),
        description: None,
        amount,
        is_taxable: false,
        vat_amount: Decimal::ZERO,
        occurred_on,
        created_at: occurred_on.and_hms_opt(12, 0, 0).unwrap().and_utc(),
    }
}

#[derive(Default)]
struct State {
    businesses: Vec<Business>,
    transactions: Vec<Transaction>,
    subscriptions: Vec<Subscription>,
    payments: Vec<PaymentRecord>,
    read_failure: Option<String>,
    write_failure: Option<String>,
}

/// Implements every store trait over plain vectors.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent read fail with `msg`.
    pub fn fail_reads(&self, msg: &str) {
        self.state.lock().unwrap().read_failure = Some(msg.to_string());
    }

    /// Makes every subsequent write fail with `msg`.
    pub fn fail_writes(&self, msg: &str) {
        self.state.lock().unwrap().write_failure = Some(msg.to_string());
    }

    pub fn put_subscription(&self, subscription: Subscription) {
        let mut state = self.state.lock().unwrap();
        state
            .subscriptions
            .retain(|s| s.account_id != subscription.account_id);
        state.subscriptions.push(subscription);
    }

    pub fn add_payment(&self, account_id: AccountId, status: PaymentStatus) {
        self.state.lock().unwrap().payments.push(PaymentRecord {
            id: PaymentId::new(),
            account_id,
            tier: TierId::Starter,
            billing_cycle: BillingCycle::Monthly,
            amount: Money::ngn(Decimal::from(5000)),
            status,
            created_at: at(2025, 1, 1),
        });
    }

    pub fn add_transaction(&self, transaction: Transaction) {
        self.state.lock().unwrap().transactions.push(transaction);
    }

    /// Adds `count` expense records of 1,000 dated and created `on`.
    pub fn add_transactions_on(&self, business_id: BusinessId, count: usize, on: NaiveDate) {
        for _ in 0..count {
            self.add_transaction(transaction(
                business_id,
                TransactionType::Expense,
                Decimal::from(1000),
                on,
            ));
        }
    }

    /// Adds `count` expense records created at `created_at` but dated `on`.
    pub fn add_backdated_transactions(
        &self,
        business_id: BusinessId,
        count: usize,
        on: NaiveDate,
        created_at: DateTime<Utc>,
    ) {
        for _ in 0..count {
            let mut tx = transaction(business_id, TransactionType::Expense, Decimal::from(1000), on);
            tx.created_at = created_at;
            self.add_transaction(tx);
        }
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().transactions.clone()
    }

    fn check_read(&self) -> Result<(), RepositoryError> {
        match &self.state.lock().unwrap().read_failure {
            Some(msg) => Err(RepositoryError::new(msg.clone())),
            None => Ok(()),
        }
    }

    fn check_write(&self) -> Result<(), RepositoryError> {
        match &self.state.lock().unwrap().write_failure {
            Some(msg) => Err(RepositoryError::new(msg.clone())),
            None => Ok(()),
        }
    }
}

impl LedgerStore for MemoryStore {
    async fn count_transactions(
        &self,
        business_id: BusinessId,
        created_since: Option<DateTime<Utc>>,
    ) -> Result<u64, RepositoryError> {
        self.check_read()?;
        let state = self.state.lock().unwrap();
        let count = state
            .transactions
            .iter()
            .filter(|t| t.business_id == business_id)
            .filter(|t| created_since.is_none_or(|since| t.created_at >= since))
            .count();
        Ok(count as u64)
    }

    async fn list_transactions(
        &self,
        business_id: BusinessId,
        range: Option<DateRange>,
    ) -> Result<Vec<Transaction>, RepositoryError> {
        self.check_read()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .transactions
            .iter()
            .filter(|t| t.business_id == business_id)
            .filter(|t| range.is_none_or(|r| r.contains(t.occurred_on)))
            .cloned()
            .collect())
    }

    async fn insert_transaction(
        &self,
        new: NewTransaction,
    ) -> Result<Transaction, RepositoryError> {
        self.check_write()?;
        let transaction = Transaction {
            id: TransactionId::new(),
            business_id: new.business_id,
            transaction_type: new.transaction_type,
            category: new.category,
            description: new.description,
            amount: new.amount,
            is_taxable: new.is_taxable,
            vat_amount: new.vat_amount,
            occurred_on: new.occurred_on,
            created_at: new.created_at,
        };
        self.state
            .lock()
            .unwrap()
            .transactions
            .push(transaction.clone());
        Ok(transaction)
    }
}

impl SubscriptionStore for MemoryStore {
    async fn get_subscription(
        &self,
        account_id: AccountId,
    ) -> Result<Option<Subscription>, RepositoryError> {
        self.check_read()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .subscriptions
            .iter()
            .find(|s| s.account_id == account_id)
            .cloned())
    }
}

impl PaymentStore for MemoryStore {
    async fn has_completed_payment(&self, account_id: AccountId) -> Result<bool, RepositoryError> {
        self.check_read()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .payments
            .iter()
            .any(|p| p.account_id == account_id && p.is_completed()))
    }
}

impl BusinessStore for MemoryStore {
    async fn find_by_owner(&self, owner_id: AccountId) -> Result<Option<Business>, RepositoryError> {
        self.check_read()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .businesses
            .iter()
            .find(|b| b.owner_id == owner_id)
            .cloned())
    }

    async fn insert_business(&self, business: Business) -> Result<Business, RepositoryError> {
        self.check_write()?;
        self.state.lock().unwrap().businesses.push(business.clone());
        Ok(business)
    }
}
