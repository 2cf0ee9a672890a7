//! The bracket scale and the deduction/contribution parameters for one tax year.
//!
//! A [`TaxSchedule`] is immutable once built. [`TaxSchedule::new`] checks the
//! invariants every calculator relies on, so the calculators themselves never
//! have to fail.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::{ContributionCapParameters, DeductionParameters, TaxBracket};

/// Reasons a schedule is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule has no brackets")]
    NoBrackets,

    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotAtZero(Decimal),

    #[error("bracket {index} starts at {found}, expected {expected}")]
    BracketGap {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {index} is empty: upper bound {upper} is not above lower bound {lower}")]
    EmptyBracket {
        index: usize,
        lower: Decimal,
        upper: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBracketNotLast(usize),

    #[error("last bracket must be unbounded, got upper bound {0}")]
    FinalBracketBounded(Decimal),

    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    InvalidRate { index: usize, rate: Decimal },

    #[error("bracket {index} rate {rate} is lower than the previous rate {previous}")]
    DescendingRate {
        index: usize,
        rate: Decimal,
        previous: Decimal,
    },

    #[error("deduction rate must be between 0 and 1, got {0}")]
    InvalidDeductionRate(Decimal),

    #[error("deduction minimum {min} exceeds maximum {max}")]
    DeductionBoundsInverted { min: Decimal, max: Decimal },

    #[error("contribution cap rate must be between 0 and 1, got {0}")]
    InvalidCapRate(Decimal),

    #[error("{name} must be non-negative, got {value}")]
    NegativeAmount { name: &'static str, value: Decimal },
}

/// Bracket scale plus deduction and contribution-cap parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    tax_year: i32,
    brackets: Vec<TaxBracket>,
    deduction: DeductionParameters,
    contribution_cap: ContributionCapParameters,
}

impl TaxSchedule {
    /// Builds a schedule after checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the brackets do not form a contiguous,
    /// ascending partition of `[0, ∞)` with non-decreasing rates in `[0, 1]`,
    /// or if any deduction/cap parameter is out of range.
    pub fn new(
        tax_year: i32,
        brackets: Vec<TaxBracket>,
        deduction: DeductionParameters,
        contribution_cap: ContributionCapParameters,
    ) -> Result<Self, ScheduleError> {
        let schedule = Self {
            tax_year,
            brackets,
            deduction,
            contribution_cap,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// French income tax scale for 2025, with the 10% standard deduction and
    /// the retirement savings (PER) deduction ceiling.
    ///
    /// ```
    /// use per_core::TaxSchedule;
    ///
    /// let schedule = TaxSchedule::france_2025();
    /// assert_eq!(schedule.brackets().len(), 5);
    /// assert!(schedule.validate().is_ok());
    /// ```
    pub fn france_2025() -> Self {
        let bracket = |lower: i64, upper: Option<i64>, rate_pct: i64| TaxBracket {
            lower_bound: Decimal::from(lower),
            upper_bound: upper.map(Decimal::from),
            rate: Decimal::new(rate_pct, 2),
        };

        Self {
            tax_year: 2025,
            brackets: vec![
                bracket(0, Some(11294), 0),
                bracket(11294, Some(28797), 11),
                bracket(28797, Some(82341), 30),
                bracket(82341, Some(177106), 41),
                bracket(177106, None, 45),
            ],
            deduction: DeductionParameters {
                rate: Decimal::new(10, 2),
                min_amount: Decimal::from(504),
                max_amount: Decimal::from(14426),
            },
            contribution_cap: ContributionCapParameters {
                rate: Decimal::new(10, 2),
                max_amount: Decimal::from(48000),
            },
        }
    }

    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn deduction(&self) -> &DeductionParameters {
        &self.deduction
    }

    pub fn contribution_cap(&self) -> &ContributionCapParameters {
        &self.contribution_cap
    }

    /// The smallest non-zero bracket rate, i.e. the first bracket that
    /// actually taxes anything.
    pub fn lowest_positive_rate(&self) -> Option<Decimal> {
        self.brackets
            .iter()
            .map(|b| b.rate)
            .filter(|rate| *rate > Decimal::ZERO)
            .min()
    }

    /// The bracket a per-part quotient falls into. Boundary values belong to
    /// the lower bracket; a zero quotient matches nothing.
    pub fn bracket_containing(
        &self,
        quotient: Decimal,
    ) -> Option<&TaxBracket> {
        self.brackets.iter().find(|b| b.contains(quotient))
    }

    /// Checks the schedule invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScheduleError`] encountered, checking brackets in
    /// order and then the deduction and cap parameters.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        self.validate_brackets()?;
        self.validate_deduction()?;
        self.validate_contribution_cap()
    }

    fn validate_brackets(&self) -> Result<(), ScheduleError> {
        let first = self.brackets.first().ok_or(ScheduleError::NoBrackets)?;
        if !first.lower_bound.is_zero() {
            return Err(ScheduleError::FirstBracketNotAtZero(first.lower_bound));
        }

        let last_index = self.brackets.len() - 1;
        let mut previous: Option<&TaxBracket> = None;

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate {
                    index,
                    rate: bracket.rate,
                });
            }

            if let Some(prev) = previous {
                // Only the last bracket may be open-ended, checked below.
                let expected = prev.upper_bound.unwrap_or(prev.lower_bound);
                if bracket.lower_bound != expected {
                    return Err(ScheduleError::BracketGap {
                        index,
                        expected,
                        found: bracket.lower_bound,
                    });
                }
                if bracket.rate < prev.rate {
                    return Err(ScheduleError::DescendingRate {
                        index,
                        rate: bracket.rate,
                        previous: prev.rate,
                    });
                }
            }

            match bracket.upper_bound {
                None if index != last_index => {
                    return Err(ScheduleError::UnboundedBracketNotLast(index));
                }
                Some(upper) if index == last_index => {
                    return Err(ScheduleError::FinalBracketBounded(upper));
                }
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(ScheduleError::EmptyBracket {
                        index,
                        lower: bracket.lower_bound,
                        upper,
                    });
                }
                _ => {}
            }

            previous = Some(bracket);
        }

        Ok(())
    }

    fn validate_deduction(&self) -> Result<(), ScheduleError> {
        let deduction = &self.deduction;
        if deduction.rate < Decimal::ZERO || deduction.rate > Decimal::ONE {
            return Err(ScheduleError::InvalidDeductionRate(deduction.rate));
        }
        if deduction.min_amount < Decimal::ZERO {
            return Err(ScheduleError::NegativeAmount {
                name: "deduction minimum",
                value: deduction.min_amount,
            });
        }
        if deduction.min_amount > deduction.max_amount {
            return Err(ScheduleError::DeductionBoundsInverted {
                min: deduction.min_amount,
                max: deduction.max_amount,
            });
        }
        Ok(())
    }

    fn validate_contribution_cap(&self) -> Result<(), ScheduleError> {
        let cap = &self.contribution_cap;
        if cap.rate < Decimal::ZERO || cap.rate > Decimal::ONE {
            return Err(ScheduleError::InvalidCapRate(cap.rate));
        }
        if cap.max_amount < Decimal::ZERO {
            return Err(ScheduleError::NegativeAmount {
                name: "contribution cap maximum",
                value: cap.max_amount,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket(
        lower: Decimal,
        upper: Option<Decimal>,
        rate: Decimal,
    ) -> TaxBracket {
        TaxBracket {
            lower_bound: lower,
            upper_bound: upper,
            rate,
        }
    }

    fn two_bracket_schedule(brackets: Vec<TaxBracket>) -> Result<TaxSchedule, ScheduleError> {
        let base = TaxSchedule::france_2025();
        TaxSchedule::new(
            2030,
            brackets,
            base.deduction().clone(),
            base.contribution_cap().clone(),
        )
    }

    // =========================================================================
    // built-in schedule
    // =========================================================================

    #[test]
    fn france_2025_is_valid() {
        assert_eq!(TaxSchedule::france_2025().validate(), Ok(()));
    }

    #[test]
    fn france_2025_parameters() {
        let schedule = TaxSchedule::france_2025();

        assert_eq!(schedule.tax_year(), 2025);
        assert_eq!(schedule.deduction().rate, dec!(0.10));
        assert_eq!(schedule.deduction().min_amount, dec!(504));
        assert_eq!(schedule.deduction().max_amount, dec!(14426));
        assert_eq!(schedule.contribution_cap().rate, dec!(0.10));
        assert_eq!(schedule.contribution_cap().max_amount, dec!(48000));
        assert_eq!(schedule.brackets()[4].upper_bound, None);
        assert_eq!(schedule.brackets()[4].rate, dec!(0.45));
    }

    #[test]
    fn lowest_positive_rate_skips_zero_bracket() {
        assert_eq!(
            TaxSchedule::france_2025().lowest_positive_rate(),
            Some(dec!(0.11))
        );
    }

    #[test]
    fn lowest_positive_rate_none_when_all_rates_zero() {
        let schedule = two_bracket_schedule(vec![
            bracket(dec!(0), Some(dec!(1000)), dec!(0)),
            bracket(dec!(1000), None, dec!(0)),
        ])
        .unwrap();

        assert_eq!(schedule.lowest_positive_rate(), None);
    }

    // =========================================================================
    // bracket_containing
    // =========================================================================

    #[test]
    fn bracket_containing_finds_bracket() {
        let schedule = TaxSchedule::france_2025();

        let found = schedule.bracket_containing(dec!(36000)).unwrap();

        assert_eq!(found.lower_bound, dec!(28797));
    }

    #[test]
    fn bracket_containing_boundary_belongs_to_lower_bracket() {
        let schedule = TaxSchedule::france_2025();

        let found = schedule.bracket_containing(dec!(28797)).unwrap();

        assert_eq!(found.rate, dec!(0.11));
    }

    #[test]
    fn bracket_containing_zero_matches_nothing() {
        assert_eq!(TaxSchedule::france_2025().bracket_containing(dec!(0)), None);
    }

    // =========================================================================
    // validation
    // =========================================================================

    #[test]
    fn rejects_empty_brackets() {
        assert_eq!(two_bracket_schedule(vec![]), Err(ScheduleError::NoBrackets));
    }

    #[test]
    fn rejects_first_bracket_above_zero() {
        let result = two_bracket_schedule(vec![bracket(dec!(100), None, dec!(0.1))]);

        assert_eq!(result, Err(ScheduleError::FirstBracketNotAtZero(dec!(100))));
    }

    #[test]
    fn rejects_gap_between_brackets() {
        let result = two_bracket_schedule(vec![
            bracket(dec!(0), Some(dec!(1000)), dec!(0)),
            bracket(dec!(1200), None, dec!(0.2)),
        ]);

        assert_eq!(
            result,
            Err(ScheduleError::BracketGap {
                index: 1,
                expected: dec!(1000),
                found: dec!(1200),
            })
        );
    }

    #[test]
    fn rejects_unbounded_bracket_before_last() {
        let result = two_bracket_schedule(vec![
            bracket(dec!(0), None, dec!(0)),
            bracket(dec!(0), None, dec!(0.2)),
        ]);

        assert_eq!(result, Err(ScheduleError::UnboundedBracketNotLast(0)));
    }

    #[test]
    fn rejects_bounded_last_bracket() {
        let result = two_bracket_schedule(vec![
            bracket(dec!(0), Some(dec!(1000)), dec!(0)),
            bracket(dec!(1000), Some(dec!(5000)), dec!(0.2)),
        ]);

        assert_eq!(result, Err(ScheduleError::FinalBracketBounded(dec!(5000))));
    }

    #[test]
    fn rejects_empty_bracket() {
        let result = two_bracket_schedule(vec![
            bracket(dec!(0), Some(dec!(0)), dec!(0)),
            bracket(dec!(0), None, dec!(0.2)),
        ]);

        assert_eq!(
            result,
            Err(ScheduleError::EmptyBracket {
                index: 0,
                lower: dec!(0),
                upper: dec!(0),
            })
        );
    }

    #[test]
    fn rejects_rate_above_one() {
        let result = two_bracket_schedule(vec![
            bracket(dec!(0), Some(dec!(1000)), dec!(0)),
            bracket(dec!(1000), None, dec!(1.5)),
        ]);

        assert_eq!(
            result,
            Err(ScheduleError::InvalidRate {
                index: 1,
                rate: dec!(1.5),
            })
        );
    }

    #[test]
    fn rejects_descending_rates() {
        let result = two_bracket_schedule(vec![
            bracket(dec!(0), Some(dec!(1000)), dec!(0.3)),
            bracket(dec!(1000), None, dec!(0.1)),
        ]);

        assert_eq!(
            result,
            Err(ScheduleError::DescendingRate {
                index: 1,
                rate: dec!(0.1),
                previous: dec!(0.3),
            })
        );
    }

    #[test]
    fn rejects_inverted_deduction_bounds() {
        let base = TaxSchedule::france_2025();
        let result = TaxSchedule::new(
            2025,
            base.brackets().to_vec(),
            DeductionParameters {
                rate: dec!(0.10),
                min_amount: dec!(20000),
                max_amount: dec!(14426),
            },
            base.contribution_cap().clone(),
        );

        assert_eq!(
            result,
            Err(ScheduleError::DeductionBoundsInverted {
                min: dec!(20000),
                max: dec!(14426),
            })
        );
    }

    #[test]
    fn rejects_negative_cap_maximum() {
        let base = TaxSchedule::france_2025();
        let result = TaxSchedule::new(
            2025,
            base.brackets().to_vec(),
            base.deduction().clone(),
            ContributionCapParameters {
                rate: dec!(0.10),
                max_amount: dec!(-1),
            },
        );

        assert_eq!(
            result,
            Err(ScheduleError::NegativeAmount {
                name: "contribution cap maximum",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn rejects_cap_rate_above_one() {
        let base = TaxSchedule::france_2025();
        let result = TaxSchedule::new(
            2025,
            base.brackets().to_vec(),
            base.deduction().clone(),
            ContributionCapParameters {
                rate: dec!(2),
                max_amount: dec!(48000),
            },
        );

        assert_eq!(result, Err(ScheduleError::InvalidCapRate(dec!(2))));
    }
}
