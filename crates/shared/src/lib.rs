//! Shared types, errors, and configuration for Monetrax.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision and kobo conversion
//! - Typed IDs for accounts, businesses, transactions, and subscriptions
//! - Application-wide error types
//! - Configuration management
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
