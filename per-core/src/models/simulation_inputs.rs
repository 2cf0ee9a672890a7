use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the user feeds the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// Net annual income before the standard deduction.
    pub gross_income: Decimal,
    /// Deductible retirement contribution for the year.
    pub contribution: Decimal,
    /// Household part count, strictly positive.
    pub parts: Decimal,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            gross_income: Decimal::from(40000),
            contribution: Decimal::from(4100),
            parts: Decimal::ONE,
        }
    }
}
