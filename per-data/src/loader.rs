use std::collections::BTreeSet;
use std::io::Read;

use per_core::{
    ContributionCapParameters, DeductionParameters, ScheduleError, TaxBracket, TaxSchedule,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when loading a tax schedule.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("no brackets found for tax year {0}")]
    YearNotFound(i32),

    #[error("no parameters found for tax year {0}")]
    ParametersNotFound(i32),

    #[error("tax year {0} has more than one parameter row")]
    DuplicateParameters(i32),

    #[error("invalid schedule: {0}")]
    Invalid(#[from] ScheduleError),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of the brackets CSV file.
///
/// - `tax_year`: the year the scale applies to (e.g., 2025)
/// - `lower_bound`: income per part where the bracket starts
/// - `upper_bound`: where it ends (empty for the open-ended top bracket)
/// - `rate`: the marginal rate as a decimal (e.g., 0.30 for 30%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub tax_year: i32,
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// A single row of the parameters CSV file: the standard deduction and the
/// contribution cap for one year.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ParameterRecord {
    pub tax_year: i32,
    pub deduction_rate: Decimal,
    pub deduction_min: Decimal,
    pub deduction_max: Decimal,
    pub cap_rate: Decimal,
    pub cap_max: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for tax schedules stored as a pair of CSV files.
///
/// Both files may hold several years; [`ScheduleLoader::build`] picks one and
/// hands the result to [`TaxSchedule::new`] for validation.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse bracket records from a CSV reader, in file order.
    pub fn parse_brackets<R: Read>(reader: R) -> Result<Vec<BracketRecord>, ScheduleLoaderError> {
        Self::parse(reader)
    }

    /// Parse parameter records from a CSV reader, in file order.
    pub fn parse_parameters<R: Read>(
        reader: R
    ) -> Result<Vec<ParameterRecord>, ScheduleLoaderError> {
        Self::parse(reader)
    }

    fn parse<R: Read, T: for<'de> Deserialize<'de>>(
        reader: R
    ) -> Result<Vec<T>, ScheduleLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: T = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Years that have at least one bracket, ascending.
    pub fn available_years(brackets: &[BracketRecord]) -> Vec<i32> {
        brackets
            .iter()
            .map(|r| r.tax_year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Assemble and validate the schedule for `tax_year`.
    ///
    /// Brackets are sorted by lower bound, so file order does not matter.
    ///
    /// # Errors
    ///
    /// - [`ScheduleLoaderError::YearNotFound`] if no bracket row has that year
    /// - [`ScheduleLoaderError::ParametersNotFound`] if no parameter row does
    /// - [`ScheduleLoaderError::DuplicateParameters`] if several do
    /// - [`ScheduleLoaderError::Invalid`] if the assembled schedule is rejected
    pub fn build(
        tax_year: i32,
        brackets: &[BracketRecord],
        parameters: &[ParameterRecord],
    ) -> Result<TaxSchedule, ScheduleLoaderError> {
        let mut year_brackets: Vec<TaxBracket> = brackets
            .iter()
            .filter(|r| r.tax_year == tax_year)
            .map(|r| TaxBracket {
                lower_bound: r.lower_bound,
                upper_bound: r.upper_bound,
                rate: r.rate,
            })
            .collect();

        if year_brackets.is_empty() {
            warn!(
                tax_year,
                available = ?Self::available_years(brackets),
                "no brackets for requested year"
            );
            return Err(ScheduleLoaderError::YearNotFound(tax_year));
        }
        year_brackets.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));

        let mut year_parameters = parameters.iter().filter(|r| r.tax_year == tax_year);
        let params = year_parameters
            .next()
            .ok_or(ScheduleLoaderError::ParametersNotFound(tax_year))?;
        if year_parameters.next().is_some() {
            return Err(ScheduleLoaderError::DuplicateParameters(tax_year));
        }

        debug!(tax_year, brackets = year_brackets.len(), "building schedule");

        let schedule = TaxSchedule::new(
            tax_year,
            year_brackets,
            DeductionParameters {
                rate: params.deduction_rate,
                min_amount: params.deduction_min,
                max_amount: params.deduction_max,
            },
            ContributionCapParameters {
                rate: params.cap_rate,
                max_amount: params.cap_max,
            },
        )?;

        Ok(schedule)
    }
}
