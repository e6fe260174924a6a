//! Rounding to whole smallest units.
//!
//! All money rounding is round-half-away-from-zero (`172.5 → 173`,
//! `-172.5 → -173`). Banker's rounding or truncation would change the
//! totals the POS screens show.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};

/// Rounding strategy used for every monetary amount.
pub const MONEY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Rounds a floating-point amount to a whole number of smallest units.
///
/// # Errors
///
/// Returns `MoneyError::InvalidAmount` for NaN, infinities, and values outside
/// the `i64` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn round_f64(amount: f64) -> MoneyResult<i64> {
    // f64::round already rounds half away from zero.
    let rounded = amount.round();
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(MoneyError::InvalidAmount(amount.to_string()));
    }
    Ok(rounded as i64)
}

/// Rounds an exact decimal amount to a whole number of smallest units.
///
/// # Errors
///
/// Returns `MoneyError::InvalidAmount` if the rounded value does not fit `i64`.
pub fn round_decimal(amount: Decimal) -> MoneyResult<i64> {
    amount
        .round_dp_with_strategy(0, MONEY_ROUNDING)
        .to_i64()
        .ok_or_else(|| MoneyError::InvalidAmount(amount.to_string()))
}
