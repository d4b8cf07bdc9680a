//! Text formatting for report values.

use robo_model::Flag;

/// Placeholder for any value that is absent or unusable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats a price as `$1,234.56`; absent or non-finite values give "N/A".
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(amount) if amount.is_finite() => {
            let cents = (amount.abs() * 100.0).round() as u128;
            let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
            format!(
                "{sign}${}.{:02}",
                group_thousands(cents / 100),
                cents % 100
            )
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a count without trailing zeros: `4`, `2.5`.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(number) if number.is_finite() && number.fract() == 0.0 => format!("{number:.0}"),
        Some(number) if number.is_finite() => {
            let text = format!("{number:.2}");
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_flag(value: Option<Flag>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |flag| flag.to_string())
}

/// The trimmed text, or "N/A" when absent or blank.
pub fn text_or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
