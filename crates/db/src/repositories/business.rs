//! Business repository.

use chrono::Utc;
use monetrax_core::business::Business;
use monetrax_core::store::{BusinessStore, RepositoryError};
use monetrax_shared::types::{AccountId, BusinessId};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::db_error;
use crate::entities::businesses;

/// Business repository implementation.
///
/// The unique index on `owner_id` backs the one-business-per-account rule
/// when two registrations race.
#[derive(Debug)]
pub struct BusinessRepository {
    db: DatabaseConnection,
}

impl BusinessRepository {
    /// Create a new business repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BusinessStore for BusinessRepository {
    async fn find_by_owner(&self, owner_id: AccountId) -> Result<Option<Business>, RepositoryError> {
        let model = businesses::Entity::find()
            .filter(businesses::Column::OwnerId.eq(owner_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(to_domain))
    }

    async fn insert_business(&self, business: Business) -> Result<Business, RepositoryError> {
        let active_model = businesses::ActiveModel {
            id: Set(business.id.into_inner()),
            owner_id: Set(business.owner_id.into_inner()),
            name: Set(business.name),
            business_type: Set(business.business_type),
            tin: Set(business.tin),
            created_at: Set(business.created_at.into()),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Ok(to_domain(model))
    }
}

fn to_domain(model: businesses::Model) -> Business {
    Business {
        id: BusinessId::from_uuid(model.id),
        owner_id: AccountId::from_uuid(model.owner_id),
        name: model.name,
        business_type: model.business_type,
        tin: model.tin,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
