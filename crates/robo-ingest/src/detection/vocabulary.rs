//! Battery vocabulary used by the content scan.

/// Whole-cell values that name a battery.
const BATTERY_VALUES: &[&str] = &[
    "aa",
    "aaa",
    "aaaa",
    "c",
    "d",
    "9v",
    "cr2032",
    "cr2025",
    "cr2016",
    "lr44",
    "lr41",
    "ag13",
    "button cell",
    "coin cell",
    "li-ion",
    "lithium",
    "lithium ion",
    "lithium-ion",
    "lithium polymer",
    "lipo",
    "li-po",
    "nimh",
    "alkaline",
];

/// Tokens that name a battery wherever they appear in a cell.
/// Single letters are left out; "C" and "D" only count as a whole cell.
const BATTERY_TOKENS: &[&str] = &[
    "aa", "aaa", "aaaa", "9v", "cr2032", "cr2025", "cr2016", "lr44", "lr41", "ag13", "li-ion",
    "lithium", "lipo", "li-po", "nimh", "alkaline",
];

const BATTERY_WORDS: &[&str] = &["battery", "batteries", "rechargeable"];

/// Whether a cell reads like a battery type.
///
/// Accepts a known value with an optional count (`"3 AAA"`, `"4 x AA"`), any
/// cell containing a known token (`"AA or AAA"`), and any cell mentioning
/// batteries (`"Built-in rechargeable"`).
pub fn is_battery_value(value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    if lowered.is_empty() {
        return false;
    }

    if BATTERY_VALUES.contains(&strip_count(&lowered)) {
        return true;
    }

    let has_token = lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .any(|token| BATTERY_TOKENS.contains(&token));
    has_token || BATTERY_WORDS.iter().any(|word| lowered.contains(word))
}

/// Drops a leading quantity: `"3 aaa"`, `"4x aa"`, `"2 × cr2032"`.
fn strip_count(value: &str) -> &str {
    let rest = value.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == value.len() {
        return value;
    }
    let rest = rest.trim_start();
    rest.strip_prefix(['x', '×']).unwrap_or(rest).trim_start()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        for value in ["AA", "aaa", " 9V ", "CR2032", "Li-ion", "Lithium Ion", "C", "NiMH"] {
            assert!(is_battery_value(value), "{value:?}");
        }
    }

    #[test]
    fn test_counted_values() {
        for value in ["3 AAA", "4x AA", "2 × CR2032", "6 AA"] {
            assert!(is_battery_value(value), "{value:?}");
        }
    }

    #[test]
    fn test_tokens_and_words() {
        assert!(is_battery_value("AA or AAA"));
        assert!(is_battery_value("Built-in rechargeable"));
        assert!(is_battery_value("USB battery pack"));
    }

    #[test]
    fn test_non_battery_values() {
        for value in ["", "Yes", "No", "Tablet", "Bee-Bot", "$89.99", "Grade 3", "Cards"] {
            assert!(!is_battery_value(value), "{value:?}");
        }
    }

    #[test]
    fn test_strip_count() {
        assert_eq!(strip_count("3 aaa"), "aaa");
        assert_eq!(strip_count("4x aa"), "aa");
        assert_eq!(strip_count("aa"), "aa");
        assert_eq!(strip_count("9v"), "v");
    }
}
