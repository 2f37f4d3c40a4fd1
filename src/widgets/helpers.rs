//! Helper functions for formatting summary data.
//!
//! This module contains utility functions used across widgets and panels for:
//! - Identifier truncation
//! - Amount formatting with thousands separators
//! - Percentages

// ============================================================================
// Text Truncation
// ============================================================================

/// Truncate text to fit in the given width.
///
/// If the text is longer than `max_len` characters, it is shortened with an
/// ellipsis in the middle (e.g., "merch...@okaxis"). Counterparty ids keep
/// their distinguishing suffix this way.
///
/// # Arguments
///
/// * `text` - The text to truncate
/// * `max_len` - The maximum length of the result, in characters
///
/// # Returns
///
/// A truncated string or the original if it fits
#[must_use]
pub fn truncate_middle(text: &str, max_len: usize) -> String {
    let len = text.chars().count();
    if len <= max_len {
        return text.to_string();
    }

    if max_len < 7 {
        return text.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = text.chars().take(prefix_len).collect();
    let suffix: String = text.chars().skip(len - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Format a currency amount for display.
///
/// Whole amounts print without decimals, others with two; thousands are
/// separated by commas.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_amount(100.0), "100");
/// assert_eq!(format_amount(1234.5), "1,234.50");
/// ```
#[must_use]
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = String::new();
    if value < 0.0 && cents != 0 {
        out.push('-');
    }
    out.push_str(&format_with_commas(whole));
    if fraction != 0 {
        out.push_str(&format!(".{fraction:02}"));
    }
    out
}

/// Format a number with commas for thousands separators.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_with_commas(1000), "1,000");
/// assert_eq!(format_with_commas(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a 0..=1 fraction as a percentage with one decimal.
#[must_use]
pub fn format_percent(share: f64) -> String {
    if !share.is_finite() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", share * 100.0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_truncate_middle() {
        let long_id = "merchantpaymentsgateway.partner@okaxis";
        let cases = [
            // (input, max_len, expected_behavior)
            ("a@x", 20, "fits without truncation"),
            ("abcdefghij", 10, "exact fit"),
            (long_id, 20, "truncated with ellipsis"),
            ("abcdefghij", 5, "very short max"),
        ];

        for (text, max_len, desc) in cases {
            let result = truncate_middle(text, max_len);
            assert!(
                result.chars().count() <= max_len,
                "{desc}: result len {} > max {}",
                result.chars().count(),
                max_len
            );
            if text.len() <= max_len {
                assert_eq!(result, text, "{desc}: should not truncate");
            } else if max_len >= 7 {
                assert!(result.contains("..."), "{desc}: should have ellipsis");
            }
        }
    }

    #[test]
    fn test_truncate_middle_multibyte() {
        let result = truncate_middle("ÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄ@upi", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("upi"));
    }

    #[test]
    fn test_format_amount() {
        let cases = [
            (0.0, "0"),
            (50.0, "50"),
            (100.0, "100"),
            (1234.5, "1,234.50"),
            (1_000_000.0, "1,000,000"),
            (99.999, "100"),
            (0.01, "0.01"),
            (-250.75, "-250.75"),
            (-0.001, "0"),
            (f64::NAN, "0"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_amount(input), expected, "value={input}");
        }
    }

    #[test]
    fn test_format_with_commas() {
        let cases = [
            (0_u64, "0"),
            (999, "999"),
            (1000, "1,000"),
            (1_234_567_890, "1,234,567,890"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_with_commas(input), expected);
        }
    }

    #[test]
    fn test_format_percent() {
        assert_snapshot!(format_percent(0.4567), @"45.7%");
        assert_snapshot!(format_percent(1.0), @"100.0%");
        assert_snapshot!(format_percent(f64::INFINITY), @"0.0%");
    }
}
