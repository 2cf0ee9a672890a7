use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a single income tax computation.
///
/// `tax`, `taxable_income` and `deduction` are rounded to whole currency
/// units; `marginal_rate` is the raw fraction of the highest bracket entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub tax: Decimal,
    pub marginal_rate: Decimal,
    pub taxable_income: Decimal,
    pub deduction: Decimal,
}

/// Tax owed with and without a deductible contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionComparison {
    pub contribution: Decimal,
    pub before: TaxResult,
    pub after: TaxResult,
    /// `before.tax - after.tax`.
    pub gain: Decimal,
}

impl ContributionComparison {
    /// True when the contribution moved the taxpayer to another marginal bracket.
    pub fn bracket_changed(&self) -> bool {
        self.before.marginal_rate != self.after.marginal_rate
    }
}
