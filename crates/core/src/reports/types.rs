//! Report data types.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::DateRange;

/// Reporting window around a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// Calendar month.
    Month,
    /// Calendar quarter.
    Quarter,
    /// Calendar year.
    Year,
}

impl ReportPeriod {
    /// Inclusive date range of the period containing `reference`.
    #[must_use]
    pub fn range(self, reference: NaiveDate) -> DateRange {
        let (first_month, months) = match self {
            Self::Month => (reference.month(), 1),
            Self::Quarter => (reference.month0() / 3 * 3 + 1, 3),
            Self::Year => (1, 12),
        };

        let start = reference
            .with_day(1)
            .and_then(|d| d.with_month(first_month))
            .unwrap_or(reference);
        let end = start
            .checked_add_months(Months::new(months))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX);

        DateRange::new(start, end)
    }
}

impl std::str::FromStr for ReportPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(format!("Unknown report period: {other}")),
        }
    }
}

/// Income and expense totals for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Requested period.
    pub period: ReportPeriod,
    /// Dates covered.
    pub range: DateRange,
    /// Sum of income amounts.
    pub total_income: Decimal,
    /// Sum of expense amounts.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub net_profit: Decimal,
    /// Transactions in the period.
    pub transaction_count: usize,
    /// Tax readiness over the period's transactions.
    pub readiness_score: u8,
}

/// Tax position for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// Requested period.
    pub period: ReportPeriod,
    /// Dates covered.
    pub range: DateRange,
    /// VAT stored on income transactions.
    pub vat_collected: Decimal,
    /// VAT stored on expense transactions.
    pub vat_paid: Decimal,
    /// Collected minus paid. Negative means a VAT credit.
    pub net_vat: Decimal,
    /// Income minus expenses.
    pub net_profit: Decimal,
    /// Income tax on positive net profit.
    pub income_tax: Decimal,
    /// VAT payable (never negative) plus income tax.
    pub total_liability: Decimal,
}
