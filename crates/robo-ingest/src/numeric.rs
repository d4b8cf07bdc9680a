//! Numeric coercion for spreadsheet cells.
//!
//! Cells carry currency symbols, thousands separators and free text
//! ("Ages 8+", "approx. $120"). Anything that does not yield a finite number
//! becomes `None`; a missing number is never reported as zero.

use std::sync::LazyLock;

use regex::Regex;

/// A decimal number embedded in free text: `1,234.50`, `120`, `.5`.
static EMBEDDED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?|\.\d+")
        .expect("Invalid embedded number regex")
});

const PLACEHOLDERS: &[&str] = &["n/a", "na", "tbd", "-", "--", "?", "unknown", "none"];

/// Parses a cell into a number.
///
/// Strips `$`, `€`, `£`, thousands separators and (non-breaking) spaces, then
/// parses. Falls back to the first number embedded in the text.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = cleaned_input(value)?;
    parse_plain(trimmed).or_else(|| embedded_numbers(trimmed).next())
}

/// Parses a cell into a number, preferring the last embedded number, so a
/// range such as `"2 - 4"` yields its upper bound.
pub fn parse_upper_bound(value: &str) -> Option<f64> {
    let trimmed = cleaned_input(value)?;
    parse_plain(trimmed).or_else(|| embedded_numbers(trimmed).last())
}

fn cleaned_input(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || PLACEHOLDERS
            .iter()
            .any(|placeholder| trimmed.eq_ignore_ascii_case(placeholder))
    {
        return None;
    }
    Some(trimmed)
}

fn parse_plain(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | ',') && !c.is_whitespace())
        .collect();
    // Reject "nan"/"inf" spellings that f64::from_str accepts.
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|number| number.is_finite())
}

fn embedded_numbers(value: &str) -> impl Iterator<Item = f64> + '_ {
    EMBEDDED_NUMBER
        .find_iter(value)
        .filter_map(|found| found.as_str().replace(',', "").parse::<f64>().ok())
        .filter(|number| number.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("123"), Some(123.0));
        assert_eq!(parse_number("  45.67 "), Some(45.67));
        assert_eq!(parse_number("0"), Some(0.0));
    }

    #[test]
    fn test_currency_and_separators() {
        assert_eq!(parse_number("$1,234.56"), Some(1234.56));
        assert_eq!(parse_number("€ 99"), Some(99.0));
        assert_eq!(parse_number("£1\u{a0}200"), Some(1200.0));
    }

    #[test]
    fn test_embedded_numbers() {
        assert_eq!(parse_number("Ages 8+"), Some(8.0));
        assert_eq!(parse_number("approx. $120"), Some(120.0));
        assert_eq!(parse_number("$1,299.00 per set of 6"), Some(1299.0));
    }

    #[test]
    fn test_placeholders_are_absent() {
        for value in ["", "  ", "N/A", "n/a", "TBD", "-", "Unknown", "free", "nan", "inf"] {
            assert_eq!(parse_number(value), None, "{value:?}");
        }
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(parse_upper_bound("2 - 4"), Some(4.0));
        assert_eq!(parse_upper_bound("1-3 students"), Some(3.0));
        assert_eq!(parse_upper_bound("4"), Some(4.0));
        assert_eq!(parse_upper_bound("N/A"), None);
    }
}
