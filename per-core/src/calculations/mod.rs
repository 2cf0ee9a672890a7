//! Tax calculations for the retirement contribution simulator.
//!
//! Each calculator borrows the parts of a [`TaxSchedule`](crate::TaxSchedule)
//! it needs and is a pure function of its inputs. [`PerSimulator`] ties them
//! together behind one entry point.

pub mod common;
pub mod contribution_cap;
pub mod deduction;
pub mod income_tax;
pub mod optimal_contribution;
pub mod scenarios;
pub mod simulator;

pub use contribution_cap::ContributionCapCalculator;
pub use deduction::DeductionCalculator;
pub use income_tax::TaxCalculator;
pub use optimal_contribution::{BISECTION_ITERATIONS, OptimalContributionSolver};
pub use scenarios::{FIXED_CONTRIBUTIONS, ScenarioGenerator};
pub use simulator::{PerSimulator, Simulation};
