//! Property-based tests for monetary value operations.
//!
//! - Construction round-trips exactly for every supported currency
//! - Currency codes normalize regardless of case
//! - Addition and subtraction are inverse
//! - Multiplication and division round half away from zero

use proptest::prelude::*;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::currency::CURRENCIES;
use super::money::MonetaryValue;
use super::rounding;
use crate::error::MoneyError;

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Strategy to pick a registered currency code.
fn currency_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CURRENCIES.iter().map(|c| c.code).collect::<Vec<_>>())
}

/// Strategy to generate amounts an `f64` represents exactly.
fn safe_amount() -> impl Strategy<Value = i64> {
    -MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER
}

/// Strategy to generate everyday amounts (-10,000,000.00 to 10,000,000.00).
fn till_amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* supported currency and safe integer n,
    /// `new(n, c).to_base_units()` SHALL equal n.
    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn prop_round_trip(n in safe_amount(), code in currency_code()) {
        let money = MonetaryValue::new(n as f64, code).unwrap();
        prop_assert_eq!(money.to_base_units().unwrap(), n);
    }

    /// *For any* amount, lower-case and upper-case codes SHALL produce equal values.
    #[test]
    fn prop_currency_normalization(n in till_amount(), code in currency_code()) {
        let lower = MonetaryValue::from_minor_units(n, &code.to_lowercase()).unwrap();
        let upper = MonetaryValue::from_minor_units(n, code).unwrap();
        prop_assert_eq!(lower, upper);
    }

    /// *For any* same-currency a and b, `a.add(b).subtract(b)` SHALL equal a.
    #[test]
    fn prop_add_subtract_inverse(
        a in till_amount(),
        b in till_amount(),
        code in currency_code(),
    ) {
        let a = MonetaryValue::from_minor_units(a, code).unwrap();
        let b = MonetaryValue::from_minor_units(b, code).unwrap();
        prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }

    /// *For any* operands in different currencies, add SHALL be rejected.
    #[test]
    fn prop_mismatch_rejected(
        a in till_amount(),
        b in till_amount(),
        left in currency_code(),
        right in currency_code(),
    ) {
        prop_assume!(left != right);
        let a = MonetaryValue::from_minor_units(a, left).unwrap();
        let b = MonetaryValue::from_minor_units(b, right).unwrap();
        let is_mismatch = matches!(a.add(&b), Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    /// *For any* amount and factor, multiply SHALL equal the decimal product
    /// rounded half away from zero.
    #[test]
    fn prop_multiply_rounds_half_away_from_zero(
        n in till_amount(),
        hundredths in -10_000i64..10_000i64,
    ) {
        let factor = Decimal::new(hundredths, 2).to_f64().unwrap();
        let money = MonetaryValue::from_minor_units(n, "USD").unwrap();
        let exact = Decimal::from(n) * Decimal::from_f64(factor).unwrap();
        let expected = rounding::round_decimal(exact).unwrap();
        prop_assert_eq!(money.multiply(factor).unwrap().amount(), expected);
    }

    /// *For any* amount and non-zero integer divisor, divide SHALL equal the exact
    /// quotient rounded half away from zero.
    #[test]
    fn prop_divide_rounds_half_away_from_zero(
        n in till_amount(),
        divisor in (1i32..1_000).prop_union(-1_000i32..0),
    ) {
        let money = MonetaryValue::from_minor_units(n, "EUR").unwrap();
        let expected = rounding::round_decimal(Decimal::from(n) / Decimal::from(divisor)).unwrap();
        prop_assert_eq!(money.divide(f64::from(divisor)).unwrap().amount(), expected);
    }

    /// *For any* values, results SHALL keep the operand's currency.
    #[test]
    fn prop_results_keep_currency(n in till_amount(), code in currency_code()) {
        let money = MonetaryValue::from_minor_units(n, code).unwrap();
        prop_assert_eq!(money.multiply(1.5).unwrap().currency_code(), code);
        prop_assert_eq!(money.divide(3.0).unwrap().currency_code(), code);
        prop_assert_eq!(money.negate().unwrap().currency_code(), code);
    }
}
