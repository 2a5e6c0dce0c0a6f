//! Shared utility functions for numeric formatting and JSON traversal.
//!
//! ## JSON Extraction Helpers
//!
//! Document trees arrive as loosely-shaped `serde_json::Value`s where any key
//! may be missing. These helpers treat absent or mistyped keys as empty:
//! - `json_string` - Extract strings
//! - `json_array` - Borrow an array, empty when missing
//! - `json_object` - Borrow a nested object

use serde_json::Value;

// =============================================================================
// JSON Value Extraction Helpers
// =============================================================================

/// Extract string from JSON value by key.
#[inline]
pub fn json_string(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(String::from)
}

/// Borrow the array under `key`, or an empty slice when absent.
#[inline]
pub fn json_array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Borrow the object stored under `key`, if it is one.
#[inline]
pub fn json_object<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| v.is_object())
}

// =============================================================================
// Numeric Helpers
// =============================================================================

/// Round to a fixed number of decimal places, exact ties to the even digit.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Ratio that resolves division by zero to 0.
#[inline]
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_helpers_on_missing_keys() {
        let value = json!({"title": "Doc", "items": [1, 2], "body": {"content": []}});
        assert_eq!(json_string(&value, "title"), Some("Doc".to_string()));
        assert_eq!(json_string(&value, "missing"), None);
        assert_eq!(json_array(&value, "items").len(), 2);
        assert!(json_array(&value, "title").is_empty());
        assert!(json_array(&value, "missing").is_empty());
        assert!(json_object(&value, "body").is_some());
        assert!(json_object(&value, "items").is_none());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(0.75, 1), 0.8);
        assert_eq!(round_to(1.25, 1), 1.2);
        assert_eq!(round_to(7.0, 2), 7.0);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(5, 0), 0.0);
        assert_eq!(ratio(6, 4), 1.5);
    }
}
