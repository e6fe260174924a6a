//! Currency registry.
//!
//! The set of recognised currencies is closed: it is a constant table compiled
//! into the binary, never mutated at runtime. Adding a currency means adding a
//! row to [`CURRENCIES`].

use crate::error::{MoneyError, MoneyResult};

/// Static registry entry describing one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyConfig {
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// Power of ten separating the smallest unit from the display unit
    /// (2 means 100 smallest units per display unit).
    pub decimal_places: u32,
    /// English display name.
    pub name: &'static str,
}

/// Currencies supported by the system.
pub static CURRENCIES: [CurrencyConfig; 3] = [
    CurrencyConfig {
        code: "INR",
        decimal_places: 2,
        name: "Indian Rupee",
    },
    CurrencyConfig {
        code: "USD",
        decimal_places: 2,
        name: "US Dollar",
    },
    CurrencyConfig {
        code: "EUR",
        decimal_places: 2,
        name: "Euro",
    },
];

/// Looks up a currency by its (already upper-cased) code.
///
/// # Errors
///
/// Returns `MoneyError::UnsupportedCurrency` if the code is not registered.
pub fn lookup(code: &str) -> MoneyResult<&'static CurrencyConfig> {
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| MoneyError::UnsupportedCurrency(code.to_string()))
}

/// Upper-cases a currency code and checks it is exactly 3 characters.
///
/// # Errors
///
/// Returns `MoneyError::InvalidCurrencyFormat` if the code is not 3 characters long.
pub fn normalize_code(code: &str) -> MoneyResult<String> {
    let upper = code.to_uppercase();
    if upper.chars().count() != 3 {
        return Err(MoneyError::InvalidCurrencyFormat(code.to_string()));
    }
    Ok(upper)
}

/// Normalizes and resolves a currency code in one step.
///
/// # Errors
///
/// Returns `InvalidCurrencyFormat` or `UnsupportedCurrency`.
pub fn resolve(code: &str) -> MoneyResult<&'static CurrencyConfig> {
    lookup(&normalize_code(code)?)
}

/// Returns the codes of all registered currencies.
pub fn supported_codes() -> impl Iterator<Item = &'static str> {
    CURRENCIES.iter().map(|c| c.code)
}

impl CurrencyConfig {
    /// Number of smallest units in one display unit (`10^decimal_places`).
    #[must_use]
    pub fn minor_units_per_unit(&self) -> u64 {
        10u64.pow(self.decimal_places)
    }
}

impl std::fmt::Display for CurrencyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
