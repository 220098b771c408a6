//! Type-safe price representation using decimal arithmetic.
//!
//! The Storefront API returns money as a `Decimal` scalar serialized as a
//! string (`"19.5"`) plus an ISO 4217 currency code. `Price` parses that pair
//! once so templates never deal with floating point.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is not a decimal number.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    /// The currency code is not three ASCII letters.
    #[error("invalid currency code '{0}'")]
    InvalidCurrency(String),
}

/// A price with currency information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code, uppercase.
    pub currency_code: String,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub fn new(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }

    /// Parse a price from the Storefront API's string amount and currency code.
    ///
    /// # Errors
    ///
    /// Returns a `PriceError` if the amount is not a decimal or the currency
    /// code is not three letters.
    pub fn parse(amount: &str, currency_code: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| PriceError::InvalidAmount(amount.to_string()))?;

        if currency_code.len() != 3 || !currency_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PriceError::InvalidCurrency(currency_code.to_string()));
        }

        Ok(Self {
            amount,
            currency_code: currency_code.to_ascii_uppercase(),
        })
    }

    /// Symbol for the well-known currencies, if any.
    #[must_use]
    pub fn symbol(&self) -> Option<&'static str> {
        match self.currency_code.as_str() {
            "USD" | "CAD" | "AUD" | "NZD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            _ => None,
        }
    }
}

/// Formats as `$19.99`, or `19.99 CHF` for currencies without a known symbol.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        match self.symbol() {
            Some(symbol) => write!(f, "{symbol}{amount:.2}"),
            None => write!(f, "{amount:.2} {}", self.currency_code),
        }
    }
}
