//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive as JSON numbers. They are converted once, at the
//! edge, into a [`Price`] rounded to two decimal places so that formatting and
//! cart arithmetic never see binary floating point.

use core::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a [`Price`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PriceError {
    /// The amount is NaN or infinite.
    #[error("price must be a finite number (got {0})")]
    NotFinite(f64),
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The amount is above [`MAX_UNIT_AMOUNT`].
    #[error("price exceeds {MAX_UNIT_AMOUNT} (got {0})")]
    TooLarge(Decimal),
}

/// Largest unit price accepted from a catalog, in whole currency units.
pub const MAX_UNIT_AMOUNT: u32 = 1_000_000_000;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Convert a floating point amount, rounding half away from zero to cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotFinite`] for NaN or infinite values,
    /// [`PriceError::Negative`] for amounts below zero and
    /// [`PriceError::TooLarge`] above [`MAX_UNIT_AMOUNT`].
    pub fn from_f64(amount: f64, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        let decimal = Decimal::from_f64(amount).ok_or(PriceError::NotFinite(amount))?;
        let rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            return Err(PriceError::Negative(rounded));
        }
        if rounded > Decimal::from(MAX_UNIT_AMOUNT) {
            return Err(PriceError::TooLarge(rounded));
        }
        Ok(Self::new(rounded, currency_code))
    }

    /// The price of `quantity` units, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        let amount = self
            .amount
            .checked_mul(Decimal::from(quantity))
            .unwrap_or(Decimal::MAX);
        Self::new(amount, self.currency_code)
    }

    /// Sum of two prices, saturating at `Decimal::MAX`. Both are expected to
    /// share a currency.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        debug_assert_eq!(self.currency_code, other.currency_code);
        let amount = self
            .amount
            .checked_add(other.amount)
            .unwrap_or(Decimal::MAX);
        Self::new(amount, self.currency_code)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol used as the price prefix.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn usd(amount: f64) -> Price {
        Price::from_f64(amount, CurrencyCode::USD).unwrap()
    }

    #[test]
    fn test_display_pads_to_two_decimals() {
        assert_eq!(usd(109.95).to_string(), "$109.95");
        assert_eq!(usd(22.3).to_string(), "$22.30");
        assert_eq!(usd(7.0).to_string(), "$7.00");
    }

    #[test]
    fn test_from_f64_rounds_half_away_from_zero() {
        assert_eq!(usd(0.125).to_string(), "$0.13");
        assert_eq!(usd(15.994).to_string(), "$15.99");
    }

    #[test]
    fn test_from_f64_rejects_non_finite_and_negative() {
        assert!(matches!(
            Price::from_f64(f64::NAN, CurrencyCode::USD),
            Err(PriceError::NotFinite(_))
        ));
        assert!(matches!(
            Price::from_f64(-1.5, CurrencyCode::USD),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn test_times_and_plus() {
        let line = usd(9.99).times(3);
        assert_eq!(line.to_string(), "$29.97");
        assert_eq!(line.plus(usd(0.03)).to_string(), "$30.00");
        assert_eq!(Price::zero(CurrencyCode::USD).to_string(), "$0.00");
    }

    #[test]
    fn test_from_f64_rejects_amounts_over_cap() {
        assert!(Price::from_f64(f64::from(MAX_UNIT_AMOUNT), CurrencyCode::USD).is_ok());
        assert!(matches!(
            Price::from_f64(1e20, CurrencyCode::USD),
            Err(PriceError::TooLarge(_))
        ));
    }

    #[test]
    fn test_times_and_plus_saturate_instead_of_overflowing() {
        let huge = Price::new(Decimal::MAX, CurrencyCode::USD);
        assert_eq!(huge.times(u32::MAX).amount, Decimal::MAX);
        assert_eq!(huge.plus(huge).amount, Decimal::MAX);

        let capped = usd(f64::from(MAX_UNIT_AMOUNT)).times(u32::MAX);
        assert_eq!(capped.amount, Decimal::from(MAX_UNIT_AMOUNT) * Decimal::from(u32::MAX));
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Price::zero(CurrencyCode::EUR).display(), "€0.00");
        assert_eq!(CurrencyCode::GBP.code(), "GBP");
    }
}
