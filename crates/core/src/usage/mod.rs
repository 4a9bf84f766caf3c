//! Transaction usage metering against tier limits.

pub mod meter;

pub use meter::{UsageCount, UsageKind, UsageMeter, UsageReport, month_start};
