//! Gatekeeper decisions over the SeaORM repositories.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use monetrax_core::business::Business;
use monetrax_core::entitlement::DenialReason;
use monetrax_core::gatekeeper::{GateOutcome, Gatekeeper};
use monetrax_core::ledger::{TransactionDraft, TransactionType};
use monetrax_core::tier::TierCatalog;
use monetrax_db::entities::{payment_transactions, subscriptions};
use monetrax_db::{PaymentRepository, SubscriptionRepository, TransactionRepository};
use monetrax_shared::types::{AccountId, BusinessId};
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, MockDatabase, Value};

#[tokio::test]
async fn test_free_business_at_limit_is_denied_without_insert() {
    let account = AccountId::new();
    let business = Business {
        id: BusinessId::new(),
        owner_id: account,
        name: "Ade Fashion Store".to_string(),
        business_type: None,
        tin: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    };

    let subscriptions_db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<subscriptions::Model>::new()])
        .into_connection();
    let payments_db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<payment_transactions::Model>::new()])
        .into_connection();
    // Only the count query is queued; an insert would fail on the mock.
    let ledger_db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(50)))])]])
        .into_connection();

    let gatekeeper = Gatekeeper::new(
        Arc::new(TierCatalog::standard()),
        Arc::new(TransactionRepository::new(ledger_db)),
        Arc::new(SubscriptionRepository::new(subscriptions_db)),
        Arc::new(PaymentRepository::new(payments_db)),
    );

    let outcome = gatekeeper
        .record_transaction(
            &business,
            account,
            TransactionDraft {
                transaction_type: TransactionType::Income,
                category: "Sales".to_string(),
                description: None,
                amount: dec!(1000),
                is_taxable: true,
                occurred_on: None,
            },
            Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap(),
        )
        .await
        .unwrap();

    let GateOutcome::Denied(denial) = outcome else {
        panic!("expected a denial");
    };
    assert_eq!(denial.reason, DenialReason::FreeLimitExceeded);
    assert_eq!(denial.current, Some(50));
    assert_eq!(denial.limit, Some(50));
}
