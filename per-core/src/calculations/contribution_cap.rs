//! Ceiling on the deductible retirement contribution.

use rust_decimal::Decimal;

use crate::ContributionCapParameters;

#[derive(Debug, Clone, Copy)]
pub struct ContributionCapCalculator<'a> {
    params: &'a ContributionCapParameters,
}

impl<'a> ContributionCapCalculator<'a> {
    pub fn new(params: &'a ContributionCapParameters) -> Self {
        Self { params }
    }

    /// `min(gross_income * rate, max_amount)`.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use per_core::{TaxSchedule, calculations::ContributionCapCalculator};
    ///
    /// let schedule = TaxSchedule::france_2025();
    /// let cap = ContributionCapCalculator::new(schedule.contribution_cap());
    ///
    /// assert_eq!(cap.compute(dec!(40000)), dec!(4000));
    /// ```
    pub fn compute(
        &self,
        gross_income: Decimal,
    ) -> Decimal {
        (gross_income * self.params.rate).min(self.params.max_amount)
    }

    /// Lowers `contribution` to the cap for `gross_income` when it exceeds it.
    pub fn clamp(
        &self,
        gross_income: Decimal,
        contribution: Decimal,
    ) -> Decimal {
        contribution.min(self.compute(gross_income))
    }
}
