//! Business registration service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use monetrax_shared::types::BusinessId;

use super::error::BusinessError;
use super::types::{Business, RegisterBusinessInput};
use crate::store::BusinessStore;

/// Registers businesses, one per owning account.
pub struct BusinessService<B: BusinessStore> {
    store: Arc<B>,
}

impl<B: BusinessStore> BusinessService<B> {
    /// Create a new business service.
    #[must_use]
    pub fn new(store: Arc<B>) -> Self {
        Self { store }
    }

    /// Registers a business for an account.
    ///
    /// The store is expected to back this with a unique constraint on the
    /// owner; the lookup here gives the caller a clean error in the common case.
    ///
    /// # Errors
    ///
    /// Returns `BusinessError::AlreadyRegistered` if the account already owns
    /// a business.
    pub async fn register(
        &self,
        input: RegisterBusinessInput,
        now: DateTime<Utc>,
    ) -> Result<Business, BusinessError> {
        if self.store.find_by_owner(input.owner_id).await?.is_some() {
            tracing::info!(owner_id = %input.owner_id, "Rejected second business for account");
            return Err(BusinessError::AlreadyRegistered(input.owner_id));
        }

        let business = Business {
            id: BusinessId::new(),
            owner_id: input.owner_id,
            name: input.name,
            business_type: input.business_type,
            tin: input.tin.filter(|tin| !tin.trim().is_empty()),
            created_at: now,
        };

        let business = self.store.insert_business(business).await?;
        tracing::info!(
            business_id = %business.id,
            owner_id = %business.owner_id,
            "Business registered"
        );
        Ok(business)
    }
}
