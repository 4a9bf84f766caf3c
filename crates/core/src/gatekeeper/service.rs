//! Entitlement-gated transaction recording.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use monetrax_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::business::Business;
use crate::entitlement::{Decision, Denial, EntitlementError, EntitlementResolver};
use crate::ledger::{NewTransaction, Transaction, TransactionDraft};
use crate::store::{LedgerStore, PaymentStore, SubscriptionStore};
use crate::tax::TaxCalculator;
use crate::tier::TierCatalog;

/// Result of asking the gatekeeper to record a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum GateOutcome {
    /// Entitlement allowed the write; this is the stored record.
    Recorded(Transaction),
    /// Entitlement refused; nothing was written.
    Denied(Denial),
}

/// Single entry point for creating transactions.
///
/// Entitlement is always evaluated before the ledger write. A refusal is
/// terminal and is never retried here.
pub struct Gatekeeper<L, S, P>
where
    L: LedgerStore,
    S: SubscriptionStore,
    P: PaymentStore,
{
    resolver: EntitlementResolver<L, S, P>,
    ledger: Arc<L>,
}

impl<L, S, P> Gatekeeper<L, S, P>
where
    L: LedgerStore,
    S: SubscriptionStore,
    P: PaymentStore,
{
    /// Create a new gatekeeper.
    #[must_use]
    pub fn new(
        catalog: Arc<TierCatalog>,
        ledger: Arc<L>,
        subscriptions: Arc<S>,
        payments: Arc<P>,
    ) -> Self {
        Self {
            resolver: EntitlementResolver::new(catalog, ledger.clone(), subscriptions, payments),
            ledger,
        }
    }

    /// The resolver used for decisions, for feature checks and usage display.
    #[must_use]
    pub fn resolver(&self) -> &EntitlementResolver<L, S, P> {
        &self.resolver
    }

    /// Records a transaction if the account is entitled to.
    ///
    /// VAT is computed once here and stored with the record: `vat(amount)`
    /// when taxable, otherwise zero. The occurrence date defaults to the UTC
    /// date of `now`.
    ///
    /// # Errors
    ///
    /// Returns `EntitlementError::Repository` if a read or the write fails.
    pub async fn record_transaction(
        &self,
        business: &Business,
        account_id: AccountId,
        draft: TransactionDraft,
        now: DateTime<Utc>,
    ) -> Result<GateOutcome, EntitlementError> {
        let decision = self
            .resolver
            .can_record_transaction(business, account_id, now)
            .await?;

        if let Decision::Denied(denial) = decision {
            return Ok(GateOutcome::Denied(denial));
        }

        let new = prepare(business, draft, now);
        let transaction = self.ledger.insert_transaction(new).await.inspect_err(|e| {
            tracing::error!(business_id = %business.id, error = %e, "Failed to insert transaction");
        })?;

        tracing::info!(
            business_id = %business.id,
            transaction_id = %transaction.id,
            transaction_type = %transaction.transaction_type,
            amount = %transaction.amount,
            vat_amount = %transaction.vat_amount,
            "Transaction recorded"
        );
        Ok(GateOutcome::Recorded(transaction))
    }
}

fn prepare(business: &Business, draft: TransactionDraft, now: DateTime<Utc>) -> NewTransaction {
    let vat_amount = if draft.is_taxable {
        TaxCalculator::vat(draft.amount)
    } else {
        Decimal::ZERO
    };

    NewTransaction {
        business_id: business.id,
        transaction_type: draft.transaction_type,
        category: draft.category,
        description: draft.description,
        amount: draft.amount,
        is_taxable: draft.is_taxable,
        vat_amount,
        occurred_on: draft.occurred_on.unwrap_or_else(|| now.date_naive()),
        created_at: now,
    }
}
