//! Property-based tests for tax calculations.

use monetrax_shared::types::BusinessId;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculator::{MAX_READINESS_SCORE, TOP_MARGINAL_RATE, TaxCalculator, VAT_RATE};
use crate::ledger::{Transaction, TransactionType};
use crate::test_support::{date, transaction};

/// Amounts from 0.00 to 10,000,000.00 in kobo steps.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|kobo| Decimal::new(kobo, 2))
}

/// Annual incomes from 0 to 20,000,000.00.
fn income() -> impl Strategy<Value = Decimal> {
    (0i64..2_000_000_000i64).prop_map(|kobo| Decimal::new(kobo, 2))
}

fn transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec((any::<bool>(), 1u32..=28), 0..40).prop_map(|rows| {
        let business_id = BusinessId::new();
        rows.into_iter()
            .map(|(is_income, day)| {
                let kind = if is_income {
                    TransactionType::Income
                } else {
                    TransactionType::Expense
                };
                transaction(business_id, kind, dec!(100), date(2026, 3, day))
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// VAT is the rate applied once and rounded to kobo.
    #[test]
    fn prop_vat_is_rounded_rate(a in amount()) {
        let vat = TaxCalculator::vat(a);
        prop_assert_eq!(vat, (a * VAT_RATE).round_dp(2));
        prop_assert!(vat.scale() <= 2);
        prop_assert!(vat >= Decimal::ZERO);
    }

    /// Raising income never lowers the tax.
    #[test]
    fn prop_income_tax_is_monotonic(x1 in income(), delta in income()) {
        let x2 = x1 + delta;
        prop_assert!(TaxCalculator::income_tax(x2) >= TaxCalculator::income_tax(x1));
    }

    /// Raising income by `d` raises tax by at most the top marginal rate times
    /// `d`, plus one kobo of rounding.
    #[test]
    fn prop_income_tax_marginal_effect_is_bounded(x in income(), d in amount()) {
        let increase = TaxCalculator::income_tax(x + d) - TaxCalculator::income_tax(x);
        prop_assert!(increase <= TOP_MARGINAL_RATE * d + dec!(0.01));
    }

    /// Income tax never exceeds the top rate applied to the whole income.
    #[test]
    fn prop_income_tax_below_flat_top_rate(x in income()) {
        prop_assert!(TaxCalculator::income_tax(x) <= (x * TOP_MARGINAL_RATE).round_dp(2));
    }

    /// The readiness score is always within range.
    #[test]
    fn prop_readiness_score_in_range(txs in transactions(), has_tax_id in any::<bool>()) {
        let score = TaxCalculator::readiness_score(&txs, has_tax_id);
        prop_assert!(score <= MAX_READINESS_SCORE);
    }

    /// Adding a tax identifier never lowers the score.
    #[test]
    fn prop_tax_id_never_lowers_score(txs in transactions()) {
        prop_assert!(
            TaxCalculator::readiness_score(&txs, true)
                >= TaxCalculator::readiness_score(&txs, false)
        );
    }
}
