//! Tax computation.
//!
//! This module provides:
//! - VAT on individual amounts
//! - Progressive income tax on annual income
//! - Tax readiness scoring over a ledger
//! - Upcoming statutory filing deadlines

pub mod calculator;
pub mod calendar;

#[cfg(test)]
mod calculator_props;

pub use calculator::{
    INCOME_TAX_BRACKETS, MAX_READINESS_SCORE, TAX_FREE_THRESHOLD, TOP_MARGINAL_RATE, TaxBracket,
    TaxCalculator, VAT_RATE,
};
pub use calendar::{FilingKind, TaxDeadline, upcoming_deadlines};
