//! Subscription repository.

use chrono::Utc;
use monetrax_core::store::{RepositoryError, SubscriptionStore};
use monetrax_core::subscription::Subscription;
use monetrax_shared::types::{AccountId, SubscriptionId};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{db_error, parse_column};
use crate::entities::subscriptions;

/// Subscription repository implementation.
#[derive(Debug)]
pub struct SubscriptionRepository {
    db: DatabaseConnection,
}

impl SubscriptionRepository {
    /// Create a new subscription repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the result of a subscription transition.
    ///
    /// Upserts on the account so an account keeps a single record; history is
    /// carried by the payment log.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn save(&self, subscription: &Subscription) -> Result<(), RepositoryError> {
        tracing::debug!(
            account_id = %subscription.account_id,
            tier = %subscription.tier,
            status = %subscription.status,
            "Saving subscription"
        );

        subscriptions::Entity::insert(to_active_model(subscription))
            .on_conflict(
                OnConflict::column(subscriptions::Column::AccountId)
                    .update_columns([
                        subscriptions::Column::Tier,
                        subscriptions::Column::Status,
                        subscriptions::Column::BillingCycle,
                        subscriptions::Column::CurrentPeriodStart,
                        subscriptions::Column::CurrentPeriodEnd,
                        subscriptions::Column::CancelAtPeriodEnd,
                        subscriptions::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

impl SubscriptionStore for SubscriptionRepository {
    async fn get_subscription(
        &self,
        account_id: AccountId,
    ) -> Result<Option<Subscription>, RepositoryError> {
        let model = subscriptions::Entity::find()
            .filter(subscriptions::Column::AccountId.eq(account_id.into_inner()))
            .order_by_desc(subscriptions::Column::UpdatedAt)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(to_domain).transpose()
    }
}

fn to_active_model(subscription: &Subscription) -> subscriptions::ActiveModel {
    subscriptions::ActiveModel {
        id: Set(subscription.id.into_inner()),
        account_id: Set(subscription.account_id.into_inner()),
        tier: Set(subscription.tier.as_str().to_string()),
        status: Set(subscription.status.as_str().to_string()),
        billing_cycle: Set(subscription.billing_cycle.as_str().to_string()),
        current_period_start: Set(subscription.current_period_start.into()),
        current_period_end: Set(subscription.current_period_end.into()),
        cancel_at_period_end: Set(subscription.cancel_at_period_end),
        created_at: Set(subscription.created_at.into()),
        updated_at: Set(subscription.updated_at.into()),
    }
}

/// Convert a database row to a core subscription.
///
/// An unrecognized tier is a data error and fails the read.
pub(crate) fn to_domain(model: subscriptions::Model) -> Result<Subscription, RepositoryError> {
    Ok(Subscription {
        id: SubscriptionId::from_uuid(model.id),
        account_id: AccountId::from_uuid(model.account_id),
        tier: parse_column("tier", &model.tier)?,
        status: parse_column("status", &model.status)?,
        billing_cycle: parse_column("billing_cycle", &model.billing_cycle)?,
        current_period_start: model.current_period_start.with_timezone(&Utc),
        current_period_end: model.current_period_end.with_timezone(&Utc),
        cancel_at_period_end: model.cancel_at_period_end,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}
