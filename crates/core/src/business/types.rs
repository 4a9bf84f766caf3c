//! Business data types.

use chrono::{DateTime, Utc};
use monetrax_shared::types::{AccountId, BusinessId};
use serde::{Deserialize, Serialize};

/// A business, owned by exactly one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    /// Business ID.
    pub id: BusinessId,
    /// Owning account.
    pub owner_id: AccountId,
    /// Trading name.
    pub name: String,
    /// Legal form (e.g., "Sole Proprietorship").
    pub business_type: Option<String>,
    /// Tax identification number.
    pub tin: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Business {
    /// Returns true if a non-blank TIN is on file.
    #[must_use]
    pub fn has_tax_id(&self) -> bool {
        self.tin.as_deref().is_some_and(|tin| !tin.trim().is_empty())
    }
}

/// Input for registering a business.
#[derive(Debug, Clone)]
pub struct RegisterBusinessInput {
    /// Owning account.
    pub owner_id: AccountId,
    /// Trading name.
    pub name: String,
    /// Legal form.
    pub business_type: Option<String>,
    /// Tax identification number.
    pub tin: Option<String>,
}
