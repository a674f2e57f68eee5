//! Number and money formatting for detail views
//!
//! Fixed locale: comma as thousands separator, dot as decimal separator,
//! `$` prefix, no fractional digits for money.

/// Placeholder shown for empty text values
pub const EMPTY: &str = "—";

fn group_thousands(integer_part: &str) -> String {
    let mut result = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Rounds half away from zero; non-finite values and negative zero become `0`
fn round_to(value: f64, decimals: u8) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formats a number with comma thousands separators and a fixed number of decimals
///
/// ```
/// use frontend::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let rounded = round_to(value, decimals);
    let formatted = format!("{:.*}", decimals as usize, rounded.abs());

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let sign = if rounded < 0.0 { "-" } else { "" };
    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, group_thousands(integer_part), d),
        None => format!("{}{}", sign, group_thousands(integer_part)),
    }
}

/// Formats money: `$` prefix, comma grouping, zero decimals; `None` is treated as zero
///
/// ```
/// use frontend::shared::format::format_currency;
/// assert_eq!(format_currency(Some(1_000_000.0)), "$1,000,000");
/// assert_eq!(format_currency(None), "$0");
/// ```
pub fn format_currency(value: Option<f64>) -> String {
    let amount = round_to(value.unwrap_or(0.0), 0);
    let digits = format_number_with_decimals(amount.abs(), 0);
    if amount < 0.0 {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Shorthand for non-optional amounts
pub fn money(value: f64) -> String {
    format_currency(Some(value))
}

/// Quantity with up to two decimals, trailing zeros dropped
pub fn format_quantity(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 2);
    match formatted.split_once('.') {
        Some((integer, decimals)) => {
            let decimals = decimals.trim_end_matches('0');
            if decimals.is_empty() {
                integer.to_string()
            } else {
                format!("{}.{}", integer, decimals)
            }
        }
        None => formatted,
    }
}

/// Percentage as stored (19 → "19%", 2.5 → "2.5%")
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_quantity(value))
}

/// Trimmed text or [`EMPTY`]
pub fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => EMPTY.to_string(),
    }
}
