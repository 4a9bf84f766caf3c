//! Income and expense ledger records.
//!
//! This module defines:
//! - Stored transactions and their type
//! - Drafts submitted for recording
//! - Resolved records handed to the ledger write
//! - Date ranges for ledger queries

pub mod transaction;
pub mod types;

pub use transaction::{Transaction, TransactionType};
pub use types::{DateRange, NewTransaction, TransactionDraft};
