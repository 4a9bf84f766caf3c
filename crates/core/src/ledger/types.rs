//! Inputs for recording transactions and querying the ledger.

use chrono::{DateTime, NaiveDate, Utc};
use monetrax_shared::types::BusinessId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// What a caller asks to record, before entitlement and VAT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Category label.
    pub category: String,
    /// Optional description.
    pub description: Option<String>,
    /// Amount in naira. Callers validate that it is non-negative.
    pub amount: Decimal,
    /// Whether VAT applies.
    pub is_taxable: bool,
    /// Occurrence date; defaults to the recording date.
    pub occurred_on: Option<NaiveDate>,
}

/// A fully resolved transaction ready for the ledger write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Owning business.
    pub business_id: BusinessId,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Category label.
    pub category: String,
    /// Optional description.
    pub description: Option<String>,
    /// Amount in naira.
    pub amount: Decimal,
    /// Whether VAT applies.
    pub is_taxable: bool,
    /// VAT to store, already rounded.
    pub vat_amount: Decimal,
    /// Occurrence date.
    pub occurred_on: NaiveDate,
    /// Recording timestamp.
    pub created_at: DateTime<Utc>,
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day, inclusive.
    pub start: NaiveDate,
    /// Last day, inclusive.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range. `end` is clamped so it is never before `start`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Returns true if the date falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let range = DateRange::new(date(2026, 3, 1), date(2026, 3, 31));
        assert!(range.contains(date(2026, 3, 1)));
        assert!(range.contains(date(2026, 3, 31)));
        assert!(!range.contains(date(2026, 2, 28)));
        assert!(!range.contains(date(2026, 4, 1)));
    }

    #[test]
    fn test_date_range_clamps_inverted_end() {
        let range = DateRange::new(date(2026, 3, 10), date(2026, 3, 1));
        assert_eq!(range.end, date(2026, 3, 10));
    }
}
