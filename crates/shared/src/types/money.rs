//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., naira).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Nigerian Naira (100 kobo).
    Ngn,
    /// US Dollar (100 cents).
    Usd,
}

impl Currency {
    /// Number of decimal places in the currency's minor unit.
    #[must_use]
    pub const fn minor_unit_scale(self) -> u32 {
        match self {
            Self::Ngn | Self::Usd => 2,
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a naira amount.
    #[must_use]
    pub const fn ngn(amount: Decimal) -> Self {
        Self::new(amount, Currency::Ngn)
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Builds an amount from integer minor units (kobo for NGN).
    #[must_use]
    pub fn from_minor_units(units: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(units, currency.minor_unit_scale()),
            currency,
        }
    }

    /// Converts to integer minor units, rounding half-even at the minor unit.
    ///
    /// Returns `None` if the amount does not fit in an `i64`.
    #[must_use]
    pub fn to_minor_units(&self) -> Option<i64> {
        let scale = self.currency.minor_unit_scale();
        let scaled = self.amount.round_dp(scale) * Decimal::from(10_i64.pow(scale));
        scaled.trunc().to_i64()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiplies the amount by an integer factor.
    #[must_use]
    pub fn times(&self, factor: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(factor),
            currency: self.currency,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ngn => write!(f, "NGN"),
            Self::Usd => write!(f, "USD"),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NGN" => Ok(Self::Ngn),
            "USD" => Ok(Self::Usd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_new() {
        let money = Money::ngn(dec!(5000.00));
        assert_eq!(money.amount, dec!(5000.00));
        assert_eq!(money.currency, Currency::Ngn);
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero(Currency::Ngn);
        assert!(money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_from_minor_units() {
        let money = Money::from_minor_units(750_050, Currency::Ngn);
        assert_eq!(money.amount, dec!(7500.50));
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(Money::ngn(dec!(75.00)).to_minor_units(), Some(7500));
        assert_eq!(Money::ngn(dec!(0.01)).to_minor_units(), Some(1));
        // Half-even at the kobo boundary.
        assert_eq!(Money::ngn(dec!(0.125)).to_minor_units(), Some(12));
        assert_eq!(Money::ngn(dec!(0.135)).to_minor_units(), Some(14));
    }

    #[test]
    fn test_minor_units_round_trip() {
        let money = Money::from_minor_units(123_456_789, Currency::Ngn);
        assert_eq!(money.to_minor_units(), Some(123_456_789));
    }

    #[test]
    fn test_times() {
        assert_eq!(Money::ngn(dec!(5000)).times(10).amount, dec!(50000));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::ngn(dec!(75.00)).to_string(), "NGN 75.00");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("ngn").unwrap(), Currency::Ngn);
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert!(Currency::from_str("IDR").is_err());
    }
}
