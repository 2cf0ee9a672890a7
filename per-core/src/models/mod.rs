mod deduction_parameters;
mod household_parts;
mod scenario;
mod simulation_inputs;
mod tax_bracket;
mod tax_result;
mod tax_schedule;

pub use deduction_parameters::{ContributionCapParameters, DeductionParameters};
pub use household_parts::HouseholdParts;
pub use scenario::Scenario;
pub use simulation_inputs::SimulationInputs;
pub use tax_bracket::TaxBracket;
pub use tax_result::{ContributionComparison, TaxResult};
pub use tax_schedule::{ScheduleError, TaxSchedule};
