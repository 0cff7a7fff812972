//! Display formatting for calculated results.
//!
//! Everything here runs strictly after classification: the worksheet hands
//! over an unrounded ratio and an exact total, and these helpers only shape
//! them for rendering.

use rust_decimal::Decimal;

/// Rounds a value to exactly two decimal places using half-up rounding.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a ratio percentage for display, e.g. `"38.00%"`.
pub fn format_percent(ratio_percent: Decimal) -> String {
    format!("{:.2}%", round_display(ratio_percent))
}

/// Formats a monetary amount with comma thousands separators,
/// e.g. `"1,900.00"`.
pub fn format_amount(amount: Decimal) -> String {
    let text = format!("{:.2}", round_display(amount));
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}
