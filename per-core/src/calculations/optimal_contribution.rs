//! Smallest contribution that drops the taxpayer into a lower bracket.
//!
//! The deduction is computed on income after the contribution, so the
//! quotient is a piecewise function of the contribution with no closed-form
//! inverse. The solver bisects over `[0, gross_income]` instead, relying on
//! the quotient being non-increasing in the contribution.
//!
//! The result is the ceiling of the final midpoint. When the exact crossing
//! is a whole number the midpoint can sit just above it, so the result is
//! the smallest crossing contribution up to one unit.

use rust_decimal::Decimal;
use tracing::debug;

use crate::TaxSchedule;
use crate::calculations::TaxCalculator;
use crate::calculations::common::income_after_contribution;

/// Number of halvings of the search interval.
pub const BISECTION_ITERATIONS: u32 = 50;

#[derive(Debug, Clone, Copy)]
pub struct OptimalContributionSolver<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> OptimalContributionSolver<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Finds the whole contribution that brings the per-part quotient down
    /// to the lower bound of the current bracket.
    ///
    /// This is the smallest such contribution, except when the exact
    /// crossing is itself a whole number: the result may then be one unit
    /// above it.
    ///
    /// Returns `None` when the taxpayer is already at or below the lowest
    /// non-zero rate, or when no contribution strictly between zero and
    /// `gross_income` achieves the crossing.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use per_core::{TaxSchedule, calculations::OptimalContributionSolver};
    ///
    /// let schedule = TaxSchedule::france_2025();
    /// let solver = OptimalContributionSolver::new(&schedule);
    ///
    /// // (40000 - c) * 0.9 <= 28797  =>  c >= 8003.33
    /// assert_eq!(solver.find(dec!(40000), dec!(1)), Some(dec!(8004)));
    /// assert_eq!(solver.find(dec!(40000), dec!(2)), None);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `parts` is zero.
    pub fn find(
        &self,
        gross_income: Decimal,
        parts: Decimal,
    ) -> Option<Decimal> {
        let taxes = TaxCalculator::new(self.schedule);
        let baseline = taxes.compute(gross_income, parts);

        let lowest_rate = self.schedule.lowest_positive_rate()?;
        if baseline.marginal_rate <= lowest_rate {
            debug!(
                marginal_rate = %baseline.marginal_rate,
                "already in the lowest taxed bracket, no optimal contribution"
            );
            return None;
        }

        let target = self.target_bound(baseline.taxable_income / parts);
        if target.is_zero() {
            return None;
        }
        debug!(%gross_income, %parts, %target, "searching for bracket crossing");

        let contribution = self.bisect(&taxes, gross_income, parts, target).ceil();
        if contribution <= Decimal::ZERO || contribution >= gross_income {
            debug!(%contribution, "crossing outside feasible range");
            return None;
        }

        debug!(%contribution, "optimal contribution found");
        Some(contribution)
    }

    /// Lower bound of the bracket holding `quotient`, or zero when none does.
    fn target_bound(
        &self,
        quotient: Decimal,
    ) -> Decimal {
        self.schedule
            .bracket_containing(quotient)
            .map(|bracket| bracket.lower_bound)
            .unwrap_or(Decimal::ZERO)
    }

    /// Midpoint of the final interval whose left end still leaves the quotient
    /// above `target` and whose right end brings it to or below.
    fn bisect(
        &self,
        taxes: &TaxCalculator<'_>,
        gross_income: Decimal,
        parts: Decimal,
        target: Decimal,
    ) -> Decimal {
        let mut low = Decimal::ZERO;
        let mut high = gross_income;

        for _ in 0..BISECTION_ITERATIONS {
            let mid = midpoint(low, high);
            let quotient = taxes.quotient(income_after_contribution(gross_income, mid), parts);
            if quotient > target {
                low = mid;
            } else {
                high = mid;
            }
        }

        midpoint(low, high)
    }
}

/// Halfway between `low` and `high` without forming `low + high`, which
/// overflows for incomes near [`Decimal::MAX`].
fn midpoint(
    low: Decimal,
    high: Decimal,
) -> Decimal {
    low + (high - low) / Decimal::TWO
}
