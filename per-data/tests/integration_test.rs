//! Integration tests loading the schedule fixtures shipped in `test-data/`.

use per_core::{PerSimulator, TaxSchedule};
use per_data::{ScheduleLoader, ScheduleLoaderError};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const BRACKETS_CSV: &str = include_str!("../test-data/brackets.csv");
const PARAMETERS_CSV: &str = include_str!("../test-data/parameters.csv");

fn load(year: i32) -> Result<TaxSchedule, ScheduleLoaderError> {
    let brackets =
        ScheduleLoader::parse_brackets(BRACKETS_CSV.as_bytes()).expect("Failed to parse brackets");
    let parameters = ScheduleLoader::parse_parameters(PARAMETERS_CSV.as_bytes())
        .expect("Failed to parse parameters");
    ScheduleLoader::build(year, &brackets, &parameters)
}

#[test]
fn test_fixture_lists_both_years() {
    let brackets =
        ScheduleLoader::parse_brackets(BRACKETS_CSV.as_bytes()).expect("Failed to parse brackets");

    assert_eq!(brackets.len(), 10);
    assert_eq!(ScheduleLoader::available_years(&brackets), vec![2025, 2026]);
}

#[test]
fn test_load_2025_equals_builtin() {
    let schedule = load(2025).expect("2025 schedule should load");

    assert_eq!(schedule, TaxSchedule::france_2025());
}

#[test]
fn test_load_2026_uses_its_own_scale() {
    let schedule = load(2026).expect("2026 schedule should load");

    assert_eq!(schedule.tax_year(), 2026);
    assert_eq!(schedule.brackets()[1].lower_bound, dec!(11497));
    assert_eq!(schedule.brackets()[4].lower_bound, dec!(180294));
    assert_eq!(schedule.deduction().min_amount, dec!(509));
    assert_eq!(schedule.deduction().max_amount, dec!(14555));
}

#[test]
fn test_loaded_schedule_drives_simulation() {
    let schedule = load(2026).expect("2026 schedule should load");
    let simulator = PerSimulator::new(&schedule);

    let result = simulator.compute_tax(dec!(40000), dec!(1));

    // (29315 - 11497) * 0.11 + (36000 - 29315) * 0.30 = 1959.98 + 2005.50
    assert_eq!(result.tax, dec!(3965));
    assert_eq!(result.marginal_rate, dec!(0.30));
    // (40000 - c) * 0.9 <= 29315  =>  c >= 7427.78
    assert_eq!(simulator.find_optimal_contribution(dec!(40000), dec!(1)), Some(dec!(7428)));
}

#[test]
fn test_load_missing_year() {
    let result = load(2030);

    assert!(matches!(result, Err(ScheduleLoaderError::YearNotFound(2030))));
}
