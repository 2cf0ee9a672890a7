//! Standard deduction: a flat share of income, clamped to a floor and a ceiling.

use rust_decimal::Decimal;

use crate::DeductionParameters;

/// Computes the bounded standard deduction.
#[derive(Debug, Clone, Copy)]
pub struct DeductionCalculator<'a> {
    params: &'a DeductionParameters,
}

impl<'a> DeductionCalculator<'a> {
    pub fn new(params: &'a DeductionParameters) -> Self {
        Self { params }
    }

    /// `clamp(gross_income * rate, min_amount, max_amount)`.
    ///
    /// `gross_income` is expected to be non-negative. The result is not
    /// rounded.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use per_core::{TaxSchedule, calculations::DeductionCalculator};
    ///
    /// let schedule = TaxSchedule::france_2025();
    /// let deduction = DeductionCalculator::new(schedule.deduction());
    ///
    /// assert_eq!(deduction.compute(dec!(40000)), dec!(4000));
    /// assert_eq!(deduction.compute(dec!(1000)), dec!(504));
    /// assert_eq!(deduction.compute(dec!(500000)), dec!(14426));
    /// ```
    pub fn compute(
        &self,
        gross_income: Decimal,
    ) -> Decimal {
        (gross_income * self.params.rate)
            .max(self.params.min_amount)
            .min(self.params.max_amount)
    }
}
