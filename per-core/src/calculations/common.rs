//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used by the calculators,
//! including rounding to whole currency units.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to whole currency units using half-up rounding.
///
/// Values at exactly 0.5 are rounded away from zero, which on the
/// non-negative amounts the engine deals with is plain half-up.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use per_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(4086.23)), dec!(4086));
/// assert_eq!(round_whole(dec!(4086.5)), dec!(4087));
/// assert_eq!(round_whole(dec!(4086.7)), dec!(4087));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use per_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Income left after paying a contribution out of it, never negative.
pub fn income_after_contribution(
    gross_income: Decimal,
    contribution: Decimal,
) -> Decimal {
    max(gross_income - contribution, Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_down_below_midpoint() {
        assert_eq!(round_whole(dec!(1925.33)), dec!(1925));
    }

    #[test]
    fn round_whole_rounds_up_at_midpoint() {
        assert_eq!(round_whole(dec!(2160.5)), dec!(2161));
    }

    #[test]
    fn round_whole_handles_zero() {
        assert_eq!(round_whole(dec!(0.00)), dec!(0));
    }

    #[test]
    fn round_whole_handles_long_fractions() {
        assert_eq!(round_whole(dec!(28796.999999999999)), dec!(28797));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(150.00), dec!(150.00)), dec!(150.00));
    }

    // =========================================================================
    // income_after_contribution tests
    // =========================================================================

    #[test]
    fn income_after_contribution_subtracts() {
        assert_eq!(income_after_contribution(dec!(40000), dec!(4100)), dec!(35900));
    }

    #[test]
    fn income_after_contribution_floors_at_zero() {
        assert_eq!(income_after_contribution(dec!(1000), dec!(3000)), dec!(0));
    }
}
