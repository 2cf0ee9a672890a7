use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Common household part counts used to split taxable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseholdParts {
    One,
    OneAndHalf,
    Two,
    TwoAndHalf,
    Three,
}

impl HouseholdParts {
    pub fn all() -> &'static [HouseholdParts] {
        &[
            HouseholdParts::One,
            HouseholdParts::OneAndHalf,
            HouseholdParts::Two,
            HouseholdParts::TwoAndHalf,
            HouseholdParts::Three,
        ]
    }

    pub fn as_decimal(&self) -> Decimal {
        match self {
            HouseholdParts::One => Decimal::ONE,
            HouseholdParts::OneAndHalf => Decimal::new(15, 1),
            HouseholdParts::Two => Decimal::TWO,
            HouseholdParts::TwoAndHalf => Decimal::new(25, 1),
            HouseholdParts::Three => Decimal::from(3),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HouseholdParts::One => "1 part (single)",
            HouseholdParts::OneAndHalf => "1.5 parts",
            HouseholdParts::Two => "2 parts (married or civil partnership)",
            HouseholdParts::TwoAndHalf => "2.5 parts",
            HouseholdParts::Three => "3 parts",
        }
    }

    /// Matches a raw part count against the presets.
    pub fn from_decimal(parts: Decimal) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.as_decimal() == parts)
    }
}

impl From<HouseholdParts> for Decimal {
    fn from(parts: HouseholdParts) -> Self {
        parts.as_decimal()
    }
}
