//! Splitting a monetary total into shares using the Largest Remainder Method.
//!
//! Used when an order total is split across payers or a discount is spread
//! over lines. Works on whole smallest units, so the shares always sum
//! EXACTLY to the total: no paise are lost or invented.
//!
//! The method:
//! 1. Compute each exact share
//! 2. Truncate each share toward zero
//! 3. Hand the leftover units, one each, to the shares with the largest
//!    truncated remainders (earlier shares win ties)

use tillpoint_shared::{MonetaryValue, MoneyError, MoneyResult};

/// Allocation service for distributing monetary totals.
pub struct AllocationService;

impl AllocationService {
    /// Splits `total` into `count` shares that differ by at most one unit.
    ///
    /// Earlier shares receive the leftover units.
    ///
    /// # Example
    ///
    /// ```
    /// use tillpoint_core::currency::AllocationService;
    /// use tillpoint_shared::MonetaryValue;
    ///
    /// // 100.00 / 3 = [33.34, 33.33, 33.33]
    /// let total = MonetaryValue::from_minor_units(10000, "USD").unwrap();
    /// let shares = AllocationService::allocate_equal(&total, 3).unwrap();
    /// let amounts: Vec<i64> = shares.iter().map(MonetaryValue::amount).collect();
    /// assert_eq!(amounts, vec![3334, 3333, 3333]);
    /// ```
    ///
    /// # Errors
    ///
    /// - `EmptyAllocation` if `count` is zero.
    /// - Any validation error raised by `total`.
    pub fn allocate_equal(total: &MonetaryValue, count: usize) -> MoneyResult<Vec<MonetaryValue>> {
        total.validate()?;
        if count == 0 {
            return Err(MoneyError::EmptyAllocation);
        }
        let count_units = i64::try_from(count)
            .map_err(|_| MoneyError::InvalidAmount(format!("cannot split into {count} shares")))?;

        let amount = total.amount();
        let base = amount / count_units;
        // Same sign as `amount`, magnitude below `count`.
        let remainder = amount % count_units;
        let extra = usize::try_from(remainder.unsigned_abs()).unwrap_or(count);
        let step = amount.signum();

        (0..count)
            .map(|i| {
                let share = if i < extra { base + step } else { base };
                MonetaryValue::from_minor_units(share, total.currency_code())
            })
            .collect()
    }

    /// Splits `total` proportionally to `ratios`.
    ///
    /// Zero ratios receive zero. Ratios need not sum to any particular value:
    /// `[50, 30, 20]` and `[5, 3, 2]` give the same split.
    ///
    /// # Errors
    ///
    /// - `EmptyAllocation` if `ratios` is empty or all zero.
    /// - Any validation error raised by `total`.
    pub fn allocate_by_ratios(
        total: &MonetaryValue,
        ratios: &[u32],
    ) -> MoneyResult<Vec<MonetaryValue>> {
        total.validate()?;
        let ratio_sum: u64 = ratios.iter().copied().map(u64::from).sum();
        if ratio_sum == 0 {
            return Err(MoneyError::EmptyAllocation);
        }

        let amount = i128::from(total.amount());
        let ratio_sum = i128::from(ratio_sum);

        // Truncated shares plus the remainder each one dropped.
        let mut shares: Vec<i128> = Vec::with_capacity(ratios.len());
        let mut dropped: Vec<(usize, i128)> = Vec::with_capacity(ratios.len());
        for (i, ratio) in ratios.iter().enumerate() {
            let exact = amount * i128::from(*ratio);
            shares.push(exact / ratio_sum);
            dropped.push((i, (exact % ratio_sum).abs()));
        }

        let leftover = amount - shares.iter().sum::<i128>();
        let step = leftover.signum();
        let leftover = usize::try_from(leftover.unsigned_abs()).unwrap_or(0);

        // Stable sort keeps earlier shares first on equal remainders.
        dropped.sort_by(|a, b| b.1.cmp(&a.1));
        for (idx, _) in dropped.iter().take(leftover) {
            shares[*idx] += step;
        }

        shares
            .into_iter()
            .map(|share| {
                let share = i64::try_from(share)
                    .map_err(|_| MoneyError::InvalidAmount(share.to_string()))?;
                MonetaryValue::from_minor_units(share, total.currency_code())
            })
            .collect()
    }
}
