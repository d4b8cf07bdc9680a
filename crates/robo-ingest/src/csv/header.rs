//! CSV header normalization.

/// Normalizes a header for display: trims, strips a UTF-8 BOM, and collapses
/// whitespace runs (including non-breaking spaces) to one space.
pub fn normalize_header(value: &str) -> String {
    value
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key used for header matching: lowercase with every whitespace character
/// removed, so `"Battery  Type"`, `"battery\u{a0}type"` and `"BatteryType"`
/// all compare equal.
pub fn detection_key(value: &str) -> String {
    value
        .trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Price  "), "Price");
        assert_eq!(normalize_header("Battery\u{a0}\u{a0}Type"), "Battery Type");
        assert_eq!(normalize_header("\u{feff}Name"), "Name");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn test_detection_key() {
        assert_eq!(detection_key("Battery Type"), "batterytype");
        assert_eq!(detection_key(" battery\u{a0} TYPE "), "batterytype");
        assert_eq!(detection_key("ScreenFree"), detection_key("Screen Free"));
        assert_eq!(detection_key("Price per Set"), "priceperset");
    }
}
