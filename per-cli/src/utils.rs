use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a command-line amount cannot be used.
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("invalid decimal '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount must not be negative, got {0}")]
    Negative(Decimal),

    #[error("value must be greater than zero, got {0}")]
    NotPositive(Decimal),
}

/// Normalizes input for decimal parsing: trims whitespace and removes
/// thousands separators (commas, spaces, underscores).
fn normalize_decimal_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' ' | '\u{a0}' | '\u{202f}'))
        .collect()
}

/// Parses a string into a [`Decimal`].
///
/// Handles `,`, `_` and spaces as thousands separators (e.g. `"40 000"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a non-negative amount of money.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseDecimalError> {
    let value = parse_decimal(s)?;
    if value < Decimal::ZERO {
        return Err(ParseDecimalError::Negative(value));
    }
    Ok(value)
}

/// Parses a strictly positive household part count.
pub fn parse_parts(s: &str) -> Result<Decimal, ParseDecimalError> {
    let value = parse_decimal(s)?;
    if value <= Decimal::ZERO {
        return Err(ParseDecimalError::NotPositive(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_decimal_accepts_thousands_separators() {
        assert_eq!(parse_decimal("40,000").unwrap(), dec!(40000));
        assert_eq!(parse_decimal("40 000").unwrap(), dec!(40000));
        assert_eq!(parse_decimal("1_234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  4100  ").unwrap(), dec!(4100));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(matches!(
            parse_decimal("abc"),
            Err(ParseDecimalError::Invalid { .. })
        ));
    }

    #[test]
    fn parse_amount_rejects_negative() {
        assert!(matches!(
            parse_amount("-100"),
            Err(ParseDecimalError::Negative(_))
        ));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_parts_requires_positive() {
        assert!(matches!(
            parse_parts("0"),
            Err(ParseDecimalError::NotPositive(_))
        ));
        assert_eq!(parse_parts("2.5").unwrap(), dec!(2.5));
    }
}
