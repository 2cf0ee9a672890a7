use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat-rate standard deduction, bounded by a floor and a ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionParameters {
    pub rate: Decimal,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
}

/// Ceiling on the deductible retirement contribution: a share of income,
/// itself capped at an absolute amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCapParameters {
    pub rate: Decimal,
    pub max_amount: Decimal,
}
