use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;

use per_cli::app::{self, ScheduleSource};
use per_cli::logging;
use per_cli::report::ClientDetails;
use per_cli::utils::{parse_amount, parse_parts};
use per_core::SimulationInputs;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Retirement contribution (PER) income tax simulator.
///
/// Computes income tax before and after a deductible contribution, suggests
/// the smallest contribution that reaches a lower bracket, and tabulates a
/// few contribution levels for comparison.
#[derive(Debug, Parser)]
#[command(name = "per-simulator", version, about)]
struct Cli {
    /// Net annual income before the standard deduction.
    #[arg(long, default_value = "40000", value_parser = parse_amount)]
    income: Decimal,

    /// Annual deductible contribution.
    #[arg(long, default_value = "4100", value_parser = parse_amount)]
    contribution: Decimal,

    /// Household parts (1, 1.5, 2, 2.5, 3, ...).
    #[arg(long, default_value = "1", value_parser = parse_parts)]
    parts: Decimal,

    /// Bracket scale CSV; the built-in 2025 scale is used when omitted.
    #[arg(long, requires = "parameters")]
    brackets: Option<PathBuf>,

    /// Deduction and contribution cap parameters CSV.
    #[arg(long, requires = "brackets")]
    parameters: Option<PathBuf>,

    /// Tax year to select from the CSV files.
    #[arg(long, default_value = "2025")]
    year: i32,

    /// Client first name, printed at the top of the report.
    #[arg(long)]
    first_name: Option<String>,

    /// Client last name.
    #[arg(long)]
    last_name: Option<String>,

    /// Client age in years.
    #[arg(long)]
    age: Option<u32>,

    /// Keep a contribution above the deductible ceiling as entered.
    #[arg(long)]
    no_clamp: bool,

    /// Log calculation details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn schedule_source(&self) -> ScheduleSource {
        match (&self.brackets, &self.parameters) {
            (Some(brackets), Some(parameters)) => ScheduleSource::Csv {
                brackets: brackets.clone(),
                parameters: parameters.clone(),
                tax_year: self.year,
            },
            _ => ScheduleSource::BuiltIn,
        }
    }

    fn inputs(&self) -> SimulationInputs {
        SimulationInputs {
            gross_income: self.income,
            contribution: self.contribution,
            parts: self.parts,
        }
    }

    fn client(&self) -> ClientDetails {
        ClientDetails {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    let schedule = app::load_schedule(&cli.schedule_source())?;
    let report = app::run(&schedule, cli.inputs(), &cli.client(), cli.no_clamp);
    print!("{report}");

    Ok(())
}
