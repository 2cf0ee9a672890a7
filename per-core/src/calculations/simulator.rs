//! Single entry point over the calculators for one schedule.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::calculations::common::income_after_contribution;
use crate::calculations::{
    ContributionCapCalculator, DeductionCalculator, OptimalContributionSolver, ScenarioGenerator,
    TaxCalculator,
};
use crate::{ContributionComparison, Scenario, SimulationInputs, TaxResult, TaxSchedule};

/// Everything a front end displays for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simulation {
    pub inputs: SimulationInputs,
    pub contribution_cap: Decimal,
    pub comparison: ContributionComparison,
    pub optimal_contribution: Option<Decimal>,
    pub scenarios: Vec<Scenario>,
}

/// Retirement contribution simulator bound to a [`TaxSchedule`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use per_core::{PerSimulator, TaxSchedule};
///
/// let schedule = TaxSchedule::france_2025();
/// let simulator = PerSimulator::new(&schedule);
///
/// let comparison = simulator.compute_tax_with_contribution(dec!(40000), dec!(4100), dec!(1));
/// assert_eq!(comparison.gain, dec!(1107));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PerSimulator<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> PerSimulator<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &'a TaxSchedule {
        self.schedule
    }

    pub fn compute_deduction(
        &self,
        gross_income: Decimal,
    ) -> Decimal {
        DeductionCalculator::new(self.schedule.deduction()).compute(gross_income)
    }

    pub fn compute_tax(
        &self,
        net_income: Decimal,
        parts: Decimal,
    ) -> TaxResult {
        TaxCalculator::new(self.schedule).compute(net_income, parts)
    }

    /// Tax before and after paying `contribution` out of `gross_income`.
    pub fn compute_tax_with_contribution(
        &self,
        gross_income: Decimal,
        contribution: Decimal,
        parts: Decimal,
    ) -> ContributionComparison {
        let taxes = TaxCalculator::new(self.schedule);
        let before = taxes.compute(gross_income, parts);
        let after = taxes.compute(income_after_contribution(gross_income, contribution), parts);
        let gain = before.tax - after.tax;

        ContributionComparison {
            contribution,
            before,
            after,
            gain,
        }
    }

    pub fn compute_cap(
        &self,
        gross_income: Decimal,
    ) -> Decimal {
        ContributionCapCalculator::new(self.schedule.contribution_cap()).compute(gross_income)
    }

    pub fn clamp_contribution(
        &self,
        gross_income: Decimal,
        contribution: Decimal,
    ) -> Decimal {
        ContributionCapCalculator::new(self.schedule.contribution_cap())
            .clamp(gross_income, contribution)
    }

    pub fn find_optimal_contribution(
        &self,
        gross_income: Decimal,
        parts: Decimal,
    ) -> Option<Decimal> {
        OptimalContributionSolver::new(self.schedule).find(gross_income, parts)
    }

    pub fn generate_scenarios(
        &self,
        gross_income: Decimal,
        contribution: Decimal,
        parts: Decimal,
    ) -> Vec<Scenario> {
        ScenarioGenerator::new(self.schedule).generate(gross_income, contribution, parts)
    }

    /// Runs every calculation for `inputs` as given.
    pub fn simulate(
        &self,
        inputs: &SimulationInputs,
    ) -> Simulation {
        let SimulationInputs {
            gross_income,
            contribution,
            parts,
        } = *inputs;

        let simulation = Simulation {
            inputs: inputs.clone(),
            contribution_cap: self.compute_cap(gross_income),
            comparison: self.compute_tax_with_contribution(gross_income, contribution, parts),
            optimal_contribution: self.find_optimal_contribution(gross_income, parts),
            scenarios: self.generate_scenarios(gross_income, contribution, parts),
        };

        info!(
            tax_year = self.schedule.tax_year(),
            %gross_income,
            %contribution,
            %parts,
            gain = %simulation.comparison.gain,
            "simulation complete"
        );
        simulation
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn compute_tax_with_contribution_reference_case() {
        let schedule = TaxSchedule::france_2025();

        let comparison =
            PerSimulator::new(&schedule).compute_tax_with_contribution(dec!(40000), dec!(4100), dec!(1));

        assert_eq!(comparison.before.tax, dec!(4086));
        assert_eq!(comparison.after.tax, dec!(2979));
        assert_eq!(comparison.gain, dec!(1107));
        assert!(!comparison.bracket_changed());
    }

    #[test]
    fn compute_tax_with_contribution_detects_bracket_change() {
        let schedule = TaxSchedule::france_2025();

        let comparison =
            PerSimulator::new(&schedule).compute_tax_with_contribution(dec!(40000), dec!(8004), dec!(1));

        assert!(comparison.bracket_changed());
        assert_eq!(comparison.after.marginal_rate, dec!(0.11));
    }

    #[test]
    fn compute_tax_with_contribution_larger_than_income() {
        let schedule = TaxSchedule::france_2025();

        let comparison =
            PerSimulator::new(&schedule).compute_tax_with_contribution(dec!(40000), dec!(50000), dec!(1));

        assert_eq!(comparison.after.tax, dec!(0));
        assert_eq!(comparison.after.taxable_income, dec!(0));
        assert_eq!(comparison.gain, dec!(4086));
    }

    #[test]
    fn compute_cap_and_clamp() {
        let schedule = TaxSchedule::france_2025();
        let simulator = PerSimulator::new(&schedule);

        assert_eq!(simulator.compute_cap(dec!(40000)), dec!(4000));
        assert_eq!(simulator.clamp_contribution(dec!(40000), dec!(4100)), dec!(4000));
    }

    #[test]
    fn simulate_collects_every_output() {
        let schedule = TaxSchedule::france_2025();

        let simulation = PerSimulator::new(&schedule).simulate(&SimulationInputs::default());

        assert_eq!(simulation.contribution_cap, dec!(4000));
        assert_eq!(simulation.comparison.contribution, dec!(4100));
        assert_eq!(simulation.optimal_contribution, Some(dec!(8004)));
        assert_eq!(simulation.scenarios.len(), 6);
    }
}
