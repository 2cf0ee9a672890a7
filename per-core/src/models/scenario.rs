use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// One row of the contribution comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub contribution: Decimal,
    pub net_income_after_contribution: Decimal,
    pub taxable_income: Decimal,
    pub tax: Decimal,
    /// Tax saved relative to a zero contribution.
    pub gain: Decimal,
    /// Change in tax relative to a zero contribution, in percent (negative
    /// when tax goes down). Zero when there is no baseline tax.
    pub percent_change: Decimal,
    pub marginal_rate: Decimal,
    pub is_optimal: bool,
    pub is_current: bool,
}

impl Scenario {
    /// Contribution spread over twelve monthly payments, in whole units.
    pub fn monthly_contribution(&self) -> Decimal {
        (self.contribution / Decimal::from(12))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn scenario(contribution: Decimal) -> Scenario {
        Scenario {
            contribution,
            net_income_after_contribution: dec!(40000) - contribution,
            taxable_income: dec!(0),
            tax: dec!(0),
            gain: dec!(0),
            percent_change: dec!(0),
            marginal_rate: dec!(0),
            is_optimal: false,
            is_current: false,
        }
    }

    #[test]
    fn monthly_contribution_rounds_to_whole_units() {
        // 4100 / 12 = 341.67
        assert_eq!(scenario(dec!(4100)).monthly_contribution(), dec!(342));
    }

    #[test]
    fn monthly_contribution_rounds_half_up() {
        // 30 / 12 = 2.5
        assert_eq!(scenario(dec!(30)).monthly_contribution(), dec!(3));
    }

    #[test]
    fn monthly_contribution_of_zero() {
        assert_eq!(scenario(dec!(0)).monthly_contribution(), dec!(0));
    }
}
