//! VAT, progressive income tax, and tax readiness scoring.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::ledger::Transaction;

/// VAT rate (7.5%).
pub const VAT_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 3);

/// Annual income at or below which no income tax is due.
pub const TAX_FREE_THRESHOLD: Decimal = Decimal::from_parts(800_000, 0, 0, false, 0);

/// Highest marginal income tax rate.
pub const TOP_MARGINAL_RATE: Decimal = Decimal::from_parts(24, 0, 0, false, 2);

/// Maximum readiness score.
pub const MAX_READINESS_SCORE: u8 = 100;

/// One band of the progressive income tax schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Width of the band; `None` for the final, unbounded band.
    pub width: Option<Decimal>,
    /// Rate applied to income inside the band.
    pub rate: Decimal,
}

/// Income tax bands applied above [`TAX_FREE_THRESHOLD`], lowest first.
pub const INCOME_TAX_BRACKETS: [TaxBracket; 6] = [
    TaxBracket {
        width: Some(Decimal::from_parts(300_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(7, 0, 0, false, 2),
    },
    TaxBracket {
        width: Some(Decimal::from_parts(300_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(11, 0, 0, false, 2),
    },
    TaxBracket {
        width: Some(Decimal::from_parts(500_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(15, 0, 0, false, 2),
    },
    TaxBracket {
        width: Some(Decimal::from_parts(500_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(19, 0, 0, false, 2),
    },
    TaxBracket {
        width: Some(Decimal::from_parts(1_600_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(21, 0, 0, false, 2),
    },
    TaxBracket {
        width: None,
        rate: TOP_MARGINAL_RATE,
    },
];

// Readiness signal weights.
const HAS_TRANSACTIONS: u8 = 15;
const MANY_TRANSACTIONS: u8 = 15;
const HAS_INCOME: u8 = 15;
const MANY_INCOME: u8 = 10;
const HAS_EXPENSE: u8 = 10;
const MANY_EXPENSE: u8 = 10;
const HAS_TAX_ID: u8 = 15;
const REGULAR_RECORDING: u8 = 10;

/// Stateless tax computations.
///
/// Inputs are assumed well-formed and non-negative; validation belongs to
/// the caller.
pub struct TaxCalculator;

impl TaxCalculator {
    /// VAT on a single amount, rounded to 2 decimal places.
    #[must_use]
    pub fn vat(amount: Decimal) -> Decimal {
        (amount * VAT_RATE).round_dp(2)
    }

    /// Progressive income tax on an annual income figure.
    ///
    /// Income up to [`TAX_FREE_THRESHOLD`] is untaxed; the excess is walked
    /// through [`INCOME_TAX_BRACKETS`]. Rounded to 2 decimal places once, at
    /// the end.
    #[must_use]
    pub fn income_tax(annual_income: Decimal) -> Decimal {
        if annual_income <= TAX_FREE_THRESHOLD {
            return Decimal::ZERO;
        }

        let mut remaining = annual_income - TAX_FREE_THRESHOLD;
        let mut tax = Decimal::ZERO;

        for bracket in &INCOME_TAX_BRACKETS {
            if remaining <= Decimal::ZERO {
                break;
            }
            let portion = bracket.width.map_or(remaining, |width| remaining.min(width));
            tax += portion * bracket.rate;
            remaining -= portion;
        }

        tax.round_dp(2)
    }

    /// Tax readiness score in `[0, 100]`.
    ///
    /// Additive over independent signals: recording activity, income and
    /// expense coverage, a tax identifier on file, and recording on more than
    /// three distinct dates. The total is capped at [`MAX_READINESS_SCORE`].
    #[must_use]
    pub fn readiness_score(transactions: &[Transaction], has_tax_id: bool) -> u8 {
        let total = transactions.len();
        let income = transactions.iter().filter(|t| t.is_income()).count();
        let expense = transactions.iter().filter(|t| t.is_expense()).count();
        let distinct_dates = transactions
            .iter()
            .map(|t| t.occurred_on)
            .collect::<BTreeSet<_>>()
            .len();

        let signals = [
            (total >= 1, HAS_TRANSACTIONS),
            (total > 10, MANY_TRANSACTIONS),
            (income >= 1, HAS_INCOME),
            (income > 5, MANY_INCOME),
            (expense >= 1, HAS_EXPENSE),
            (expense > 5, MANY_EXPENSE),
            (has_tax_id, HAS_TAX_ID),
            (distinct_dates > 3, REGULAR_RECORDING),
        ];

        let score = signals
            .iter()
            .filter(|(fired, _)| *fired)
            .fold(0u8, |acc, (_, points)| acc.saturating_add(*points));

        score.min(MAX_READINESS_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionType;
    use crate::test_support::{date, transaction};
    use monetrax_shared::types::BusinessId;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1000), dec!(75.00))]
    #[case(dec!(0), dec!(0))]
    #[case(dec!(0.10), dec!(0.01))]
    #[case(dec!(0.50), dec!(0.04))]
    #[case(dec!(5000), dec!(375.00))]
    #[case(dec!(1234.56), dec!(92.59))]
    fn test_vat(#[case] amount: Decimal, #[case] expected: Decimal) {
        assert_eq!(TaxCalculator::vat(amount), expected);
    }

    #[test]
    fn test_vat_uses_bankers_rounding_at_half_kobo() {
        // 0.60 * 0.075 = 0.045 exactly; half-even rounds to 0.04.
        assert_eq!(TaxCalculator::vat(dec!(0.60)), dec!(0.04));
        // 1.40 * 0.075 = 0.105 exactly; half-even rounds to 0.10.
        assert_eq!(TaxCalculator::vat(dec!(1.40)), dec!(0.10));
    }

    #[rstest]
    #[case(dec!(0), dec!(0))]
    #[case(dec!(500000), dec!(0))]
    #[case(dec!(800000), dec!(0))]
    #[case(dec!(800001), dec!(0.07))]
    #[case(dec!(1100000), dec!(21000))]
    #[case(dec!(1400000), dec!(54000))]
    #[case(dec!(1900000), dec!(129000))]
    #[case(dec!(2400000), dec!(224000))]
    #[case(dec!(4000000), dec!(560000))]
    #[case(dec!(5000000), dec!(800000))]
    fn test_income_tax(#[case] income: Decimal, #[case] expected: Decimal) {
        assert_eq!(TaxCalculator::income_tax(income), expected);
    }

    #[test]
    fn test_income_tax_through_all_bounded_brackets() {
        let expected = dec!(0.07) * dec!(300000)
            + dec!(0.11) * dec!(300000)
            + dec!(0.15) * dec!(500000)
            + dec!(0.19) * dec!(500000)
            + dec!(0.21) * dec!(1600000);
        assert_eq!(TaxCalculator::income_tax(dec!(4000000)), expected);
    }

    fn ledger(income: usize, expense: usize, days: u32) -> Vec<Transaction> {
        let business_id = BusinessId::new();
        let kinds = std::iter::repeat_n(TransactionType::Income, income)
            .chain(std::iter::repeat_n(TransactionType::Expense, expense));
        kinds
            .enumerate()
            .map(|(i, kind)| {
                let day = u32::try_from(i).unwrap() % days + 1;
                transaction(business_id, kind, dec!(1000), date(2026, 3, day))
            })
            .collect()
    }

    #[test]
    fn test_readiness_empty_without_tax_id_is_zero() {
        assert_eq!(TaxCalculator::readiness_score(&[], false), 0);
    }

    #[test]
    fn test_readiness_tax_id_alone() {
        assert_eq!(TaxCalculator::readiness_score(&[], true), 15);
    }

    #[test]
    fn test_readiness_every_signal_fires() {
        let transactions = ledger(6, 6, 4);
        assert_eq!(TaxCalculator::readiness_score(&transactions, true), 100);
    }

    #[rstest]
    // One income on one day: has-transactions + has-income.
    #[case(1, 0, 1, false, 30)]
    // One expense on one day: has-transactions + has-expense.
    #[case(0, 1, 1, false, 25)]
    // Eleven transactions over four days, six income and five expense.
    #[case(6, 5, 4, true, 90)]
    // Exactly ten transactions does not count as many.
    #[case(5, 5, 3, false, 40)]
    // Exactly three distinct dates is not regular recording.
    #[case(6, 6, 3, true, 90)]
    fn test_readiness_signal_boundaries(
        #[case] income: usize,
        #[case] expense: usize,
        #[case] days: u32,
        #[case] has_tax_id: bool,
        #[case] expected: u8,
    ) {
        let transactions = ledger(income, expense, days);
        assert_eq!(
            TaxCalculator::readiness_score(&transactions, has_tax_id),
            expected
        );
    }
}
