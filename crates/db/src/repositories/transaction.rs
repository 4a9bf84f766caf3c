//! Transaction repository backing the core ledger store.

use chrono::{DateTime, Utc};
use monetrax_core::ledger::{DateRange, NewTransaction, Transaction};
use monetrax_core::store::{LedgerStore, RepositoryError};
use monetrax_shared::types::{BusinessId, TransactionId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{db_error, parse_column};
use crate::entities::transactions;

/// Transaction repository implementation.
#[derive(Debug)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Create a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl LedgerStore for TransactionRepository {
    async fn count_transactions(
        &self,
        business_id: BusinessId,
        created_since: Option<DateTime<Utc>>,
    ) -> Result<u64, RepositoryError> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::BusinessId.eq(business_id.into_inner()));
        if let Some(since) = created_since {
            query = query.filter(transactions::Column::CreatedAt.gte(since));
        }

        query.count(&self.db).await.map_err(db_error)
    }

    async fn list_transactions(
        &self,
        business_id: BusinessId,
        range: Option<DateRange>,
    ) -> Result<Vec<Transaction>, RepositoryError> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::BusinessId.eq(business_id.into_inner()));
        if let Some(range) = range {
            query = query.filter(transactions::Column::OccurredOn.between(range.start, range.end));
        }

        let models = query
            .order_by_desc(transactions::Column::OccurredOn)
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn insert_transaction(
        &self,
        new: NewTransaction,
    ) -> Result<Transaction, RepositoryError> {
        let active_model = transactions::ActiveModel {
            id: Set(TransactionId::new().into_inner()),
            business_id: Set(new.business_id.into_inner()),
            transaction_type: Set(new.transaction_type.as_str().to_string()),
            category: Set(new.category),
            description: Set(new.description),
            amount: Set(new.amount),
            is_taxable: Set(new.is_taxable),
            vat_amount: Set(new.vat_amount),
            occurred_on: Set(new.occurred_on),
            created_at: Set(new.created_at.into()),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        to_domain(model)
    }
}

/// Convert a database row to a core transaction.
pub(crate) fn to_domain(model: transactions::Model) -> Result<Transaction, RepositoryError> {
    Ok(Transaction {
        id: TransactionId::from_uuid(model.id),
        business_id: BusinessId::from_uuid(model.business_id),
        transaction_type: parse_column("transaction_type", &model.transaction_type)?,
        category: model.category,
        description: model.description,
        amount: model.amount,
        is_taxable: model.is_taxable,
        vat_amount: model.vat_amount,
        occurred_on: model.occurred_on,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use chrono::{NaiveDate, TimeZone};
    use monetrax_core::ledger::TransactionType;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use uuid::Uuid;

    fn model(transaction_type: &str) -> transactions::Model {
        transactions::Model {
            id: Uuid::now_v7(),
            business_id: Uuid::now_v7(),
            transaction_type: transaction_type.to_string(),
            category: "Sales".to_string(),
            description: None,
            amount: dec!(1000),
            is_taxable: true,
            vat_amount: dec!(75.00),
            occurred_on: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 15, 9, 30, 0).unwrap().into(),
        }
    }

    #[test]
    fn test_to_domain() {
        let row = model("income");
        let tx = to_domain(row.clone()).unwrap();
        assert_eq!(tx.id.into_inner(), row.id);
        assert_eq!(tx.transaction_type, TransactionType::Income);
        assert_eq!(tx.vat_amount, dec!(75.00));
        assert_eq!(tx.created_at, Utc.with_ymd_and_hms(2026, 3, 15, 9, 30, 0).unwrap());
    }

    #[tokio::test]
    async fn test_count_window_filters_on_creation_time() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(3)))])]])
            .into_connection();
        let repo = TransactionRepository::new(db);
        let since = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();

        let count = repo
            .count_transactions(BusinessId::new(), Some(since))
            .await
            .unwrap();
        assert_eq!(count, 3);

        let log = format!("{:?}", repo.db.into_transaction_log());
        assert!(log.contains("created_at\\\" >="));
        assert!(!log.contains("occurred_on\\\" >="));
    }

    #[test]
    fn test_unknown_transaction_type_is_rejected() {
        let err = to_domain(model("transfer")).unwrap_err();
        assert!(err.0.contains("transaction_type"));
    }
}
