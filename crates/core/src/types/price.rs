//! Type-safe price representation using decimal arithmetic.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts use [`Decimal`] so catalog prices and cart totals never go through
/// floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., pounds, not piastres).
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

    /// Create a price in Egyptian pounds, the storefront's currency.
    #[must_use]
    pub const fn egp(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::EGP)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount.normalize(), self.currency_code.symbol())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Egyptian pound - every price in the catalog is denominated in it.
    #[default]
    EGP,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol used in customer-facing text.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::EGP => "ج.م",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EGP => "EGP",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_egp_display() {
        let price = Price::egp(Decimal::from(90));
        assert_eq!(price.to_string(), "90 ج.م");
    }

    #[test]
    fn test_display_normalizes_trailing_zeros() {
        let price = Price::egp(Decimal::new(3550, 2)); // 35.50
        assert_eq!(price.to_string(), "35.5 ج.م");
    }

    #[test]
    fn test_default_currency_is_egp() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::EGP);
        assert_eq!(CurrencyCode::default().code(), "EGP");
    }
}
