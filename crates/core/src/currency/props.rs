//! Property-based tests for money services.
//!
//! - Allocation Sum Invariant
//! - Allocation Fairness
//! - Tax Breakdown Consistency
//! - Formatting Stability

use proptest::prelude::*;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use tillpoint_shared::MonetaryValue;

use super::allocation::AllocationService;
use super::format::FormatMoney;
use super::tax::TaxBreakdown;

/// Strategy to generate amounts (-10,000,000.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy to generate share count (1 to 100).
fn share_count() -> impl Strategy<Value = usize> {
    1usize..100
}

/// Strategy to generate 1-10 ratios, at least one non-zero.
fn ratios() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..1_000, 1..10).prop_filter("all-zero ratios", |r| {
        r.iter().any(|v| *v > 0)
    })
}

fn inr(amount: i64) -> MonetaryValue {
    MonetaryValue::from_minor_units(amount, "INR").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Allocation Sum Invariant
    // =========================================================================

    /// *For any* total and count, the equal shares SHALL sum exactly to the total.
    #[test]
    fn prop_allocate_equal_sum_invariant(total in amount(), count in share_count()) {
        let total = inr(total);
        let shares = AllocationService::allocate_equal(&total, count).unwrap();
        prop_assert_eq!(shares.len(), count);
        prop_assert_eq!(MonetaryValue::sum(&shares, "INR").unwrap(), total);
    }

    /// *For any* total and ratios, the shares SHALL sum exactly to the total.
    #[test]
    fn prop_allocate_by_ratios_sum_invariant(total in amount(), ratios in ratios()) {
        let total = inr(total);
        let shares = AllocationService::allocate_by_ratios(&total, &ratios).unwrap();
        prop_assert_eq!(shares.len(), ratios.len());
        prop_assert_eq!(MonetaryValue::sum(&shares, "INR").unwrap(), total);
    }

    // =========================================================================
    // Allocation Fairness
    // =========================================================================

    /// *For any* total and count, equal shares SHALL differ by at most one unit.
    #[test]
    fn prop_allocate_equal_differs_by_one(total in amount(), count in share_count()) {
        let shares = AllocationService::allocate_equal(&inr(total), count).unwrap();
        let min = shares.iter().map(MonetaryValue::amount).min().unwrap();
        let max = shares.iter().map(MonetaryValue::amount).max().unwrap();
        prop_assert!(max - min <= 1);
    }

    /// *For any* ratios, zero ratios SHALL receive zero and no share SHALL have
    /// the opposite sign of the total.
    #[test]
    fn prop_allocate_by_ratios_respects_zero_and_sign(total in amount(), ratios in ratios()) {
        let shares = AllocationService::allocate_by_ratios(&inr(total), &ratios).unwrap();
        for (share, ratio) in shares.iter().zip(&ratios) {
            if *ratio == 0 {
                prop_assert!(share.is_zero());
            }
            prop_assert!(share.amount() == 0 || share.amount().signum() == total.signum());
        }
    }

    // =========================================================================
    // Tax Breakdown Consistency
    // =========================================================================

    /// *For any* net amount, gross SHALL equal net plus the sum of components.
    #[test]
    fn prop_tax_gross_is_net_plus_components(net in amount(), basis_points in 0u32..3_000) {
        let rate = Decimal::new(i64::from(basis_points), 4).to_f64().unwrap();
        let net = inr(net);
        let breakdown = TaxBreakdown::intra_state(&net, rate).unwrap();
        let components: Vec<_> = breakdown.components.iter().map(|c| c.amount).collect();
        prop_assert_eq!(
            breakdown.gross,
            net.add(&MonetaryValue::sum(&components, "INR").unwrap()).unwrap()
        );
    }

    // =========================================================================
    // Formatting Stability
    // =========================================================================

    /// *For any* amount, negating SHALL only add a leading minus sign.
    #[test]
    fn prop_format_negative_is_prefixed(units in 1i64..1_000_000_000_000) {
        let positive = inr(units).format().unwrap();
        let negative = inr(-units).format().unwrap();
        prop_assert_eq!(negative, format!("-{positive}"));
    }

    /// *For any* amount, the formatted string SHALL always carry exactly two
    /// fraction digits.
    #[test]
    fn prop_format_fixed_fraction_digits(units in amount()) {
        let formatted = inr(units).format_in("en-US").unwrap();
        let fraction = formatted.rsplit('.').next().unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
    }
}
