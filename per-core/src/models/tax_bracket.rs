use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the progressive scale, applied to the income of a single
/// household part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    /// `None` for the open-ended top bracket.
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Whether `quotient` falls inside this bracket.
    ///
    /// The lower bound is exclusive and the upper bound inclusive, so a value
    /// sitting exactly on a boundary belongs to the lower bracket.
    pub fn contains(
        &self,
        quotient: Decimal,
    ) -> bool {
        quotient > self.lower_bound && self.upper_bound.is_none_or(|upper| quotient <= upper)
    }

    /// Portion of `quotient` that is taxed at this bracket's rate.
    pub fn taxable_slice(
        &self,
        quotient: Decimal,
    ) -> Decimal {
        if quotient <= self.lower_bound {
            return Decimal::ZERO;
        }
        let ceiling = match self.upper_bound {
            Some(upper) => quotient.min(upper),
            None => quotient,
        };
        ceiling - self.lower_bound
    }
}
