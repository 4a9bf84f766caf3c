//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for businesses, transactions, subscriptions
//!   and payments
//! - Repository implementations of the `monetrax-core` store traits
//!
//! Schema migrations are managed outside this crate.

pub mod entities;
pub mod repositories;

pub use repositories::{
    BusinessRepository, PaymentRepository, SubscriptionRepository, TransactionRepository,
};

use monetrax_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database connected"
    );
    Ok(db)
}
