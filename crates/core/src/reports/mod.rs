//! Financial and tax reporting.
//!
//! This module produces per-period summaries straight from the ledger:
//! - Financial summary (income, expenses, net profit, readiness)
//! - Tax summary (VAT position, income tax, total liability)

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
