use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use per_data::ScheduleLoader;

/// Check a tax schedule stored as CSV and print its brackets.
///
/// The brackets file has the columns `tax_year,lower_bound,upper_bound,rate`
/// (empty `upper_bound` for the top bracket). The parameters file has
/// `tax_year,deduction_rate,deduction_min,deduction_max,cap_rate,cap_max`.
#[derive(Parser, Debug)]
#[command(name = "per-schedule-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the bracket scale
    #[arg(short, long)]
    brackets: PathBuf,

    /// Path to the CSV file containing deduction and cap parameters
    #[arg(short, long)]
    parameters: PathBuf,

    /// Tax year to check; every year in the brackets file when omitted
    #[arg(short, long)]
    year: Option<i32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let brackets_file = File::open(&args.brackets)
        .with_context(|| format!("Failed to open: {}", args.brackets.display()))?;
    let brackets = ScheduleLoader::parse_brackets(brackets_file)
        .with_context(|| format!("Failed to parse CSV: {}", args.brackets.display()))?;

    let parameters_file = File::open(&args.parameters)
        .with_context(|| format!("Failed to open: {}", args.parameters.display()))?;
    let parameters = ScheduleLoader::parse_parameters(parameters_file)
        .with_context(|| format!("Failed to parse CSV: {}", args.parameters.display()))?;

    let years = match args.year {
        Some(year) => vec![year],
        None => ScheduleLoader::available_years(&brackets),
    };

    for year in years {
        let schedule = ScheduleLoader::build(year, &brackets, &parameters)
            .with_context(|| format!("Schedule for {year} is invalid"))?;

        println!("{}: {} brackets", year, schedule.brackets().len());
        for bracket in schedule.brackets() {
            match bracket.upper_bound {
                Some(upper) => println!("  {} - {} @ {}", bracket.lower_bound, upper, bracket.rate),
                None => println!("  {} and above @ {}", bracket.lower_bound, bracket.rate),
            }
        }
        let deduction = schedule.deduction();
        println!(
            "  deduction {} (min {}, max {}), contribution cap {} (max {})",
            deduction.rate,
            deduction.min_amount,
            deduction.max_amount,
            schedule.contribution_cap().rate,
            schedule.contribution_cap().max_amount
        );
    }

    Ok(())
}
