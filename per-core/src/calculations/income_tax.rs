//! Progressive income tax with household parts.
//!
//! # Computation
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Standard deduction on net income |
//! | 2    | Taxable income: net income minus deduction, minimum 0 |
//! | 3    | Quotient: taxable income divided by the household parts |
//! | 4    | Tax per part: each bracket entered taxes its slice of the quotient |
//! | 5    | Tax: tax per part multiplied back by the parts, rounded |
//!
//! Because the scale is applied to the per-part quotient, two households with
//! the same taxable income but different part counts pay different tax.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use per_core::{TaxSchedule, calculations::TaxCalculator};
//!
//! let schedule = TaxSchedule::france_2025();
//! let result = TaxCalculator::new(&schedule).compute(dec!(40000), dec!(1));
//!
//! assert_eq!(result.deduction, dec!(4000));
//! assert_eq!(result.taxable_income, dec!(36000));
//! assert_eq!(result.tax, dec!(4086));
//! assert_eq!(result.marginal_rate, dec!(0.30));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::calculations::DeductionCalculator;
use crate::calculations::common::{max, round_whole};
use crate::{TaxResult, TaxSchedule};

/// Calculator for income tax under a [`TaxSchedule`].
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Computes tax owed and the marginal rate on `net_income`.
    ///
    /// `net_income` must be non-negative.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is zero.
    pub fn compute(
        &self,
        net_income: Decimal,
        parts: Decimal,
    ) -> TaxResult {
        let deduction = self.deduction(net_income);
        let taxable_income = max(net_income - deduction, Decimal::ZERO);
        let quotient = taxable_income / parts;

        let (tax_per_part, marginal_rate) = self.apply_brackets(quotient);
        let tax = round_whole(tax_per_part * parts);

        trace!(%net_income, %parts, %quotient, %tax, %marginal_rate, "computed income tax");

        TaxResult {
            tax,
            marginal_rate,
            taxable_income: round_whole(taxable_income),
            deduction: round_whole(deduction),
        }
    }

    /// Unrounded taxable income per household part.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is zero.
    pub fn quotient(
        &self,
        net_income: Decimal,
        parts: Decimal,
    ) -> Decimal {
        let taxable_income = max(net_income - self.deduction(net_income), Decimal::ZERO);
        taxable_income / parts
    }

    fn deduction(
        &self,
        net_income: Decimal,
    ) -> Decimal {
        DeductionCalculator::new(self.schedule.deduction()).compute(net_income)
    }

    /// Walks the brackets in ascending order, returning the tax for one part
    /// and the rate of the highest bracket entered.
    fn apply_brackets(
        &self,
        quotient: Decimal,
    ) -> (Decimal, Decimal) {
        let mut tax_per_part = Decimal::ZERO;
        let mut marginal_rate = Decimal::ZERO;

        for bracket in self.schedule.brackets() {
            if quotient <= bracket.lower_bound {
                break;
            }
            tax_per_part += bracket.taxable_slice(quotient) * bracket.rate;
            marginal_rate = bracket.rate;
        }

        (tax_per_part, marginal_rate)
    }
}
