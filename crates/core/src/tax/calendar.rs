//! Statutory filing deadlines.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Day of the month on which the previous month's VAT return is due.
pub const VAT_FILING_DAY: u32 = 21;

/// Month and day on which the annual income tax return is due.
pub const INCOME_TAX_DUE: (u32, u32) = (3, 31);

/// Kind of filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingKind {
    /// Monthly VAT return.
    Vat,
    /// Annual income tax return.
    IncomeTax,
}

/// An upcoming filing deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDeadline {
    /// Filing kind.
    pub kind: FilingKind,
    /// Display name.
    pub name: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// What the filing covers.
    pub description: String,
}

/// Next VAT and income tax deadlines on or after `today`, soonest first.
#[must_use]
pub fn upcoming_deadlines(today: NaiveDate) -> Vec<TaxDeadline> {
    let mut deadlines: Vec<TaxDeadline> = [next_vat_filing(today), next_income_tax_filing(today)]
        .into_iter()
        .flatten()
        .collect();
    deadlines.sort_by_key(|d| d.due_date);
    deadlines
}

fn next_vat_filing(today: NaiveDate) -> Option<TaxDeadline> {
    let this_month = today.with_day(VAT_FILING_DAY)?;
    let due_date = if today <= this_month {
        this_month
    } else {
        this_month.checked_add_months(Months::new(1))?
    };
    let covered = due_date.checked_sub_months(Months::new(1))?;

    Some(TaxDeadline {
        kind: FilingKind::Vat,
        name: "Monthly VAT Filing".to_string(),
        due_date,
        description: format!("VAT return for {}", covered.format("%B %Y")),
    })
}

fn next_income_tax_filing(today: NaiveDate) -> Option<TaxDeadline> {
    let (month, day) = INCOME_TAX_DUE;
    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    let due_date = if today <= this_year {
        this_year
    } else {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day)?
    };

    Some(TaxDeadline {
        kind: FilingKind::IncomeTax,
        name: "Annual Income Tax".to_string(),
        due_date,
        description: format!("Income tax return for {}", due_date.year() - 1),
    })
}
