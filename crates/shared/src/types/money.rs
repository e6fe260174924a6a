//! Fixed-point monetary value.
//!
//! CRITICAL: amounts are stored as an integer count of the currency's smallest
//! unit (cents, paise). Scaling by a factor or divisor goes through
//! `rust_decimal::Decimal` and is rounded back to whole units, never kept as a
//! float.
//!
//! Every operation re-validates its operands against the currency registry
//! before computing, and every result is built through the factory so it is
//! validated again on the way out.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::currency::{self, CurrencyConfig};
use super::rounding;
use crate::error::{MoneyError, MoneyResult};

/// An exact amount of money in a registered currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonetaryValue {
    /// The amount in the smallest currency unit (e.g., cents).
    amount: i64,
    /// Upper-case ISO 4217 code, borrowed from its registry entry.
    currency_code: &'static str,
}

/// Wire shape accepted on deserialization, validated through the factory.
#[derive(Deserialize)]
struct MonetaryValueRepr {
    amount: i64,
    currency_code: String,
}

// Written by hand: the borrowed `&'static str` code would otherwise tie the
// derived impl to `Deserialize<'static>`.
impl<'de> Deserialize<'de> for MonetaryValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = MonetaryValueRepr::deserialize(deserializer)?;
        Self::from_minor_units(repr.amount, &repr.currency_code)
            .map_err(serde::de::Error::custom)
    }
}

impl MonetaryValue {
    /// Creates a monetary value from an amount in smallest units.
    ///
    /// The amount is rounded half away from zero; the currency code is
    /// upper-cased before validation.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is NaN, infinite, or outside `i64`.
    /// - `InvalidCurrencyFormat` if the code is not 3 characters.
    /// - `UnsupportedCurrency` if the code is not registered.
    pub fn new(amount: f64, currency_code: &str) -> MoneyResult<Self> {
        let amount = rounding::round_f64(amount)?;
        Self::from_minor_units(amount, currency_code)
    }

    /// Creates a monetary value from an exact integer amount in smallest units.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrencyFormat` or `UnsupportedCurrency`.
    pub fn from_minor_units(amount: i64, currency_code: &str) -> MoneyResult<Self> {
        let currency = currency::resolve(currency_code)?;
        let value = Self {
            amount,
            currency_code: currency.code,
        };
        value.validate()?;
        Ok(value)
    }

    /// Creates a zero amount in the specified currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrencyFormat` or `UnsupportedCurrency`.
    pub fn zero(currency_code: &str) -> MoneyResult<Self> {
        Self::from_minor_units(0, currency_code)
    }

    /// Re-checks the value's invariants: a 3-letter code that is still
    /// present in the registry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrencyFormat` or `UnsupportedCurrency`.
    pub fn validate(&self) -> MoneyResult<()> {
        self.currency().map(|_| ())
    }

    /// Returns the registry entry for this value's currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrencyFormat` or `UnsupportedCurrency`.
    pub fn currency(&self) -> MoneyResult<&'static CurrencyConfig> {
        if self.currency_code.chars().count() != 3 {
            return Err(MoneyError::InvalidCurrencyFormat(
                self.currency_code.to_string(),
            ));
        }
        currency::lookup(self.currency_code)
    }

    /// The amount in smallest units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// The upper-case currency code.
    #[must_use]
    pub const fn currency_code(&self) -> &'static str {
        self.currency_code
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Adds two values in the same currency.
    ///
    /// # Errors
    ///
    /// - `CurrencyMismatch` if the currencies differ.
    /// - `InvalidAmount` if the sum overflows.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "add")?;
        let total = self.amount.checked_add(other.amount).ok_or_else(|| {
            MoneyError::InvalidAmount(format!("{} + {}", self.amount, other.amount))
        })?;
        Self::from_minor_units(total, self.currency_code)
    }

    /// Subtracts `other` from `self`; both must be in the same currency.
    ///
    /// # Errors
    ///
    /// - `CurrencyMismatch` if the currencies differ.
    /// - `InvalidAmount` if the difference overflows.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "subtract")?;
        let difference = self.amount.checked_sub(other.amount).ok_or_else(|| {
            MoneyError::InvalidAmount(format!("{} - {}", self.amount, other.amount))
        })?;
        Self::from_minor_units(difference, self.currency_code)
    }

    /// Multiplies by `factor`, rounding half away from zero.
    ///
    /// `6900 * 0.025` is `172.5`, which rounds to `173`.
    ///
    /// # Errors
    ///
    /// - `InvalidMultiplier` if `factor` is NaN or infinite.
    /// - `InvalidAmount` if the product does not fit.
    pub fn multiply(&self, factor: f64) -> MoneyResult<Self> {
        self.validate()?;
        if !factor.is_finite() {
            return Err(MoneyError::InvalidMultiplier);
        }
        if self.is_zero() {
            return Ok(*self);
        }
        let overflow = || MoneyError::InvalidAmount(format!("{} * {factor}", self.amount));
        // Outside Decimal's range: a huge factor overflows any non-zero amount,
        // a vanishing one rounds it to zero.
        let Some(factor) = Decimal::from_f64(factor) else {
            return if factor.abs() < 1.0 {
                Self::zero(self.currency_code)
            } else {
                Err(overflow())
            };
        };
        let product = Decimal::from(self.amount)
            .checked_mul(factor)
            .ok_or_else(overflow)?;
        Self::from_minor_units(rounding::round_decimal(product)?, self.currency_code)
    }

    /// Divides by `divisor`, rounding half away from zero.
    ///
    /// # Errors
    ///
    /// - `InvalidDivisor` if `divisor` is NaN or infinite.
    /// - `DivisionByZero` if `divisor` is zero.
    /// - `InvalidAmount` if the quotient does not fit.
    pub fn divide(&self, divisor: f64) -> MoneyResult<Self> {
        self.validate()?;
        if !divisor.is_finite() {
            return Err(MoneyError::InvalidDivisor);
        }
        if divisor == 0.0 {
            return Err(MoneyError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(*self);
        }
        let overflow = || MoneyError::InvalidAmount(format!("{} / {divisor}", self.amount));
        // Outside Decimal's range: a huge divisor rounds any i64 to zero, a
        // vanishing one leaves the quotient unbounded.
        let Some(divisor) = Decimal::from_f64(divisor) else {
            return if divisor.abs() > 1.0 {
                Self::zero(self.currency_code)
            } else {
                Err(overflow())
            };
        };
        // Subnormal divisors collapse to a zero decimal; the quotient is unbounded.
        let quotient = Decimal::from(self.amount)
            .checked_div(divisor)
            .ok_or_else(overflow)?;
        Self::from_minor_units(rounding::round_decimal(quotient)?, self.currency_code)
    }

    /// Returns the value with its sign flipped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for `i64::MIN`.
    pub fn negate(&self) -> MoneyResult<Self> {
        self.validate()?;
        let negated = self
            .amount
            .checked_neg()
            .ok_or_else(|| MoneyError::InvalidAmount(format!("-({})", self.amount)))?;
        Self::from_minor_units(negated, self.currency_code)
    }

    /// Sums values that must all be in `currency_code`.
    ///
    /// An empty input yields zero in that currency.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the currency check or an addition.
    pub fn sum<'a, I>(values: I, currency_code: &str) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        values
            .into_iter()
            .try_fold(Self::zero(currency_code)?, |total, value| total.add(value))
    }

    /// Returns the amount in smallest units after validating the value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrencyFormat` or `UnsupportedCurrency`.
    pub fn to_base_units(&self) -> MoneyResult<i64> {
        self.validate()?;
        Ok(self.amount)
    }

    /// Returns the amount in display units (`amount / 10^decimal_places`).
    ///
    /// The result is exact: `10050` USD cents is `100.50`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrencyFormat` or `UnsupportedCurrency`.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        let currency = self.currency()?;
        Decimal::try_new(self.amount, currency.decimal_places)
            .map_err(|e| MoneyError::InvalidAmount(e.to_string()))
    }

    fn ensure_same_currency(&self, other: &Self, operation: &'static str) -> MoneyResult<()> {
        self.validate()?;
        other.validate()?;
        if self.currency_code != other.currency_code {
            return Err(MoneyError::CurrencyMismatch {
                operation,
                left: self.currency_code.to_string(),
                right: other.currency_code.to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for MonetaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_decimal() {
            Ok(decimal) => write!(f, "{decimal} {}", self.currency_code),
            Err(_) => write!(f, "{} {} (minor units)", self.amount, self.currency_code),
        }
    }
}
