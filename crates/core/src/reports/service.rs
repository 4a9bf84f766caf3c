//! Report generation service.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{FinancialSummary, ReportPeriod, TaxSummary};
use crate::business::Business;
use crate::ledger::{DateRange, Transaction};
use crate::store::LedgerStore;
use crate::tax::TaxCalculator;

/// Service for generating financial and tax summaries.
///
/// Reads the ledger directly; reports never pass through the gatekeeper.
pub struct ReportService<L: LedgerStore> {
    ledger: Arc<L>,
}

impl<L: LedgerStore> ReportService<L> {
    /// Create a new report service.
    #[must_use]
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Income, expenses and readiness for the period containing `reference`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Repository` if the ledger read fails.
    pub async fn financial_summary(
        &self,
        business: &Business,
        period: ReportPeriod,
        reference: NaiveDate,
    ) -> Result<FinancialSummary, ReportError> {
        let range = period.range(reference);
        let transactions = self.load(business, range).await?;
        let totals = Totals::of(&transactions);

        Ok(FinancialSummary {
            period,
            range,
            total_income: totals.income,
            total_expenses: totals.expenses,
            net_profit: totals.net_profit(),
            transaction_count: transactions.len(),
            readiness_score: TaxCalculator::readiness_score(&transactions, business.has_tax_id()),
        })
    }

    /// VAT and income tax position for the period containing `reference`.
    ///
    /// VAT figures sum the amounts stored on each transaction; they are never
    /// recomputed.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Repository` if the ledger read fails.
    pub async fn tax_summary(
        &self,
        business: &Business,
        period: ReportPeriod,
        reference: NaiveDate,
    ) -> Result<TaxSummary, ReportError> {
        let range = period.range(reference);
        let transactions = self.load(business, range).await?;
        let totals = Totals::of(&transactions);

        let net_vat = totals.vat_collected - totals.vat_paid;
        let net_profit = totals.net_profit();
        let income_tax = TaxCalculator::income_tax(net_profit.max(Decimal::ZERO));

        Ok(TaxSummary {
            period,
            range,
            vat_collected: totals.vat_collected,
            vat_paid: totals.vat_paid,
            net_vat,
            net_profit,
            income_tax,
            total_liability: net_vat.max(Decimal::ZERO) + income_tax,
        })
    }

    async fn load(
        &self,
        business: &Business,
        range: DateRange,
    ) -> Result<Vec<Transaction>, ReportError> {
        let transactions = self
            .ledger
            .list_transactions(business.id, Some(range))
            .await
            .inspect_err(|e| {
                tracing::error!(business_id = %business.id, error = %e, "Failed to load transactions");
            })?;
        tracing::debug!(
            business_id = %business.id,
            start = %range.start,
            end = %range.end,
            count = transactions.len(),
            "Loaded transactions for report"
        );
        Ok(transactions)
    }
}

#[derive(Default)]
struct Totals {
    income: Decimal,
    expenses: Decimal,
    vat_collected: Decimal,
    vat_paid: Decimal,
}

impl Totals {
    fn of(transactions: &[Transaction]) -> Self {
        transactions.iter().fold(Self::default(), |mut acc, tx| {
            if tx.is_income() {
                acc.income += tx.amount;
                acc.vat_collected += tx.vat_amount;
            } else {
                acc.expenses += tx.amount;
                acc.vat_paid += tx.vat_amount;
            }
            acc
        })
    }

    fn net_profit(&self) -> Decimal {
        self.income - self.expenses
    }
}
