//! Wiring between the command line, the schedule source and the engine.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use per_core::{HouseholdParts, PerSimulator, SimulationInputs, TaxSchedule};
use per_data::ScheduleLoader;
use tracing::{debug, info, warn};

use crate::report::{self, ClientDetails};

/// Where the tax schedule comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleSource {
    BuiltIn,
    Csv {
        brackets: PathBuf,
        parameters: PathBuf,
        tax_year: i32,
    },
}

/// Loads the schedule described by `source`.
pub fn load_schedule(source: &ScheduleSource) -> Result<TaxSchedule> {
    match source {
        ScheduleSource::BuiltIn => {
            debug!("using built-in 2025 schedule");
            Ok(TaxSchedule::france_2025())
        }
        ScheduleSource::Csv {
            brackets,
            parameters,
            tax_year,
        } => {
            let bracket_records = ScheduleLoader::parse_brackets(open(brackets)?)
                .with_context(|| format!("Failed to parse CSV: {}", brackets.display()))?;
            let parameter_records = ScheduleLoader::parse_parameters(open(parameters)?)
                .with_context(|| format!("Failed to parse CSV: {}", parameters.display()))?;

            let schedule = ScheduleLoader::build(*tax_year, &bracket_records, &parameter_records)
                .with_context(|| format!("Failed to load the {tax_year} schedule"))?;
            info!(tax_year, "loaded schedule from {}", brackets.display());
            Ok(schedule)
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open: {}", path.display()))
}

/// Runs one simulation and returns the rendered report.
///
/// Unless `allow_over_cap` is set, the contribution is first lowered to the
/// deductible ceiling for the given income.
pub fn run(
    schedule: &TaxSchedule,
    mut inputs: SimulationInputs,
    client: &ClientDetails,
    allow_over_cap: bool,
) -> String {
    let simulator = PerSimulator::new(schedule);

    if HouseholdParts::from_decimal(inputs.parts).is_none() {
        warn!(parts = %inputs.parts, "unusual household part count");
    }

    if !allow_over_cap {
        let clamped = simulator.clamp_contribution(inputs.gross_income, inputs.contribution);
        if clamped != inputs.contribution {
            info!(
                requested = %inputs.contribution,
                ceiling = %clamped,
                "contribution lowered to the deductible ceiling"
            );
            inputs.contribution = clamped;
        }
    }

    let simulation = simulator.simulate(&inputs);
    report::render(&simulation, schedule.tax_year(), client)
}
