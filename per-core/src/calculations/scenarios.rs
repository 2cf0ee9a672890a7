//! Comparison table of contribution amounts.

use std::iter;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::income_after_contribution;
use crate::calculations::{OptimalContributionSolver, TaxCalculator};
use crate::{Scenario, TaxSchedule};

/// Fixed amounts always shown alongside the user's own contribution.
pub const FIXED_CONTRIBUTIONS: [i64; 4] = [0, 1000, 2000, 3000];

#[derive(Debug, Clone, Copy)]
pub struct ScenarioGenerator<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> ScenarioGenerator<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Builds one [`Scenario`] per distinct candidate amount, sorted by
    /// contribution.
    ///
    /// Candidates are the fixed amounts, `user_contribution`, and the optimal
    /// contribution when one exists. Gains and percent changes are relative
    /// to a zero contribution.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use per_core::{TaxSchedule, calculations::ScenarioGenerator};
    ///
    /// let schedule = TaxSchedule::france_2025();
    /// let scenarios = ScenarioGenerator::new(&schedule).generate(dec!(40000), dec!(4100), dec!(1));
    ///
    /// let amounts: Vec<_> = scenarios.iter().map(|s| s.contribution).collect();
    /// assert_eq!(amounts, vec![dec!(0), dec!(1000), dec!(2000), dec!(3000), dec!(4100), dec!(8004)]);
    /// ```
    pub fn generate(
        &self,
        gross_income: Decimal,
        user_contribution: Decimal,
        parts: Decimal,
    ) -> Vec<Scenario> {
        let taxes = TaxCalculator::new(self.schedule);
        let baseline = taxes.compute(gross_income, parts);
        let optimal = OptimalContributionSolver::new(self.schedule).find(gross_income, parts);

        let amounts = Self::candidate_amounts(user_contribution, optimal);
        debug!(count = amounts.len(), ?optimal, "generating scenarios");

        amounts
            .into_iter()
            .map(|contribution| {
                let net_income = income_after_contribution(gross_income, contribution);
                let result = taxes.compute(net_income, parts);
                let percent_change = if baseline.tax.is_zero() {
                    Decimal::ZERO
                } else {
                    (result.tax - baseline.tax) / baseline.tax * Decimal::ONE_HUNDRED
                };

                Scenario {
                    contribution,
                    net_income_after_contribution: net_income,
                    taxable_income: result.taxable_income,
                    tax: result.tax,
                    gain: baseline.tax - result.tax,
                    percent_change,
                    marginal_rate: result.marginal_rate,
                    is_optimal: optimal == Some(contribution),
                    is_current: contribution == user_contribution,
                }
            })
            .collect()
    }

    /// Sorted, deduplicated contribution amounts to tabulate.
    fn candidate_amounts(
        user_contribution: Decimal,
        optimal: Option<Decimal>,
    ) -> Vec<Decimal> {
        let mut amounts: Vec<Decimal> = FIXED_CONTRIBUTIONS
            .iter()
            .copied()
            .map(Decimal::from)
            .chain(iter::once(user_contribution))
            .chain(optimal)
            .collect();
        amounts.sort();
        amounts.dedup();
        amounts
    }
}
