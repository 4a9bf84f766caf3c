//! Ledger transaction record.

use chrono::{DateTime, NaiveDate, Utc};
use monetrax_shared::types::{BusinessId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionType {
    /// Wire identifier of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {other}")),
        }
    }
}

/// A stored income or expense record.
///
/// Immutable once created; `vat_amount` is fixed at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Business this transaction belongs to.
    pub business_id: BusinessId,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Category label (e.g., "Sales", "Rent").
    pub category: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Amount in naira, non-negative.
    pub amount: Decimal,
    /// Whether VAT applies.
    pub is_taxable: bool,
    /// VAT computed when the transaction was recorded.
    pub vat_amount: Decimal,
    /// Date the transaction occurred.
    pub occurred_on: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns true for income transactions.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Returns true for expense transactions.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}
