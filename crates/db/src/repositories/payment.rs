//! Payment log repository.

use chrono::Utc;
use monetrax_core::store::{PaymentStore, RepositoryError};
use monetrax_core::subscription::{PaymentRecord, PaymentStatus};
use monetrax_shared::types::{AccountId, Money, PaymentId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{db_error, parse_column};
use crate::entities::payment_transactions;

/// Payment repository implementation. The log is append-only.
#[derive(Debug)]
pub struct PaymentRepository {
    db: DatabaseConnection,
}

impl PaymentRepository {
    /// Create a new payment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a payment record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn record(&self, payment: &PaymentRecord) -> Result<PaymentRecord, RepositoryError> {
        let active_model = payment_transactions::ActiveModel {
            id: Set(payment.id.into_inner()),
            account_id: Set(payment.account_id.into_inner()),
            tier: Set(payment.tier.as_str().to_string()),
            billing_cycle: Set(payment.billing_cycle.as_str().to_string()),
            amount: Set(payment.amount.amount),
            currency: Set(payment.amount.currency.to_string()),
            status: Set(payment.status.as_str().to_string()),
            created_at: Set(payment.created_at.into()),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        tracing::info!(
            account_id = %payment.account_id,
            payment_id = %payment.id,
            status = payment.status.as_str(),
            "Payment recorded"
        );
        to_domain(model)
    }

    /// Lists an account's payments, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<PaymentRecord>, RepositoryError> {
        let models = payment_transactions::Entity::find()
            .filter(payment_transactions::Column::AccountId.eq(account_id.into_inner()))
            .order_by_desc(payment_transactions::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(to_domain).collect()
    }
}

impl PaymentStore for PaymentRepository {
    async fn has_completed_payment(&self, account_id: AccountId) -> Result<bool, RepositoryError> {
        let model = payment_transactions::Entity::find()
            .filter(payment_transactions::Column::AccountId.eq(account_id.into_inner()))
            .filter(payment_transactions::Column::Status.eq(PaymentStatus::Completed.as_str()))
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.is_some())
    }
}

fn to_domain(model: payment_transactions::Model) -> Result<PaymentRecord, RepositoryError> {
    Ok(PaymentRecord {
        id: PaymentId::from_uuid(model.id),
        account_id: AccountId::from_uuid(model.account_id),
        tier: parse_column("tier", &model.tier)?,
        billing_cycle: parse_column("billing_cycle", &model.billing_cycle)?,
        amount: Money::new(model.amount, parse_column("currency", &model.currency)?),
        status: parse_column("status", &model.status)?,
        created_at: model.created_at.with_timezone(&Utc),
    })
}
