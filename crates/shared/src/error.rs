//! Application-wide error types.
//!
//! `MoneyError` covers every validation failure raised by monetary values and
//! the services built on them. `AppError` is what callers (form handlers,
//! screens) present to users.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Validation failures raised by monetary values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Amount is not representable as an integer count of smallest units
    /// (NaN, infinite, or outside the `i64` range).
    #[error("Amount must be an integer: {0}")]
    InvalidAmount(String),

    /// Currency code is not exactly 3 characters.
    #[error("Currency must be a 3-letter ISO 4217 code: {0:?}")]
    InvalidCurrencyFormat(String),

    /// Currency code is well-formed but not in the registry.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Binary operation invoked on operands in different currencies.
    #[error("Cannot {operation} different currencies: {left} and {right}")]
    CurrencyMismatch {
        /// The operation that was attempted (`add`, `subtract`, ...).
        operation: &'static str,
        /// Currency of the left operand.
        left: String,
        /// Currency of the right operand.
        right: String,
    },

    /// Multiplication factor is NaN or infinite.
    #[error("Multiplier must be a finite number")]
    InvalidMultiplier,

    /// Divisor is NaN or infinite.
    #[error("Divisor must be a finite number")]
    InvalidDivisor,

    /// Divisor is exactly zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Allocation requested with no shares to allocate into.
    #[error("Allocation requires at least one non-zero share")]
    EmptyAllocation,
}

impl MoneyError {
    /// Returns the stable error code for this failure.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidCurrencyFormat(_) => "INVALID_CURRENCY_FORMAT",
            Self::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InvalidMultiplier => "INVALID_MULTIPLIER",
            Self::InvalidDivisor => "INVALID_DIVISOR",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::EmptyAllocation => "EMPTY_ALLOCATION",
        }
    }
}

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error, shown to the user as-is.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Returns the HTTP-style status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Configuration(_) => 500,
        }
    }

    /// Returns the error code for presentation.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
