//! Euro and percentage formatting in the French style.

use rust_decimal::{Decimal, RoundingStrategy};

/// Narrow no-break space used between digit groups.
const GROUP_SEPARATOR: char = '\u{202f}';
/// No-break space before the currency sign.
const CURRENCY_SEPARATOR: char = '\u{a0}';

fn round_dp(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Groups the digits of a whole number by thousands.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Whole euros, e.g. `40 000 €`.
pub fn format_euro(amount: Decimal) -> String {
    let rounded = round_dp(amount, 0);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{sign}{}{CURRENCY_SEPARATOR}€", group_thousands(&digits))
}

/// A rate given as a fraction, as a whole percentage: `0.30` gives `30%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", round_dp(rate * Decimal::ONE_HUNDRED, 0).normalize())
}

/// A value already in percent, with one decimal: `-27.09` gives `-27.1%`.
pub fn format_percent_change(percent: Decimal) -> String {
    format!("{:.1}%", round_dp(percent, 1))
}
