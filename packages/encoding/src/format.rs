//! Number and text formatting shared by popups and summary cards.

use std::borrow::Cow;
use std::fmt::Write as _;

/// Sentinel shown in place of a missing measurement.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats an integer with `,` thousands separators (`1234567` →
/// `"1,234,567"`).
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats `value` with exactly `decimals` fractional digits, rounding
/// half away from zero (`2.5` → `"3"`, `-1.25` → `"-1.3"`).
///
/// Rounding is applied to `value * 10^decimals` in binary floating point,
/// so a decimal literal sitting just below a tie still rounds up once
/// scaled: `fixed(0.15, 1)` is `"0.2"`, whereas JavaScript's
/// `(0.15).toFixed(1)` rounds the exact binary value and gives `"0.1"`.
#[must_use]
pub fn fixed(value: f64, decimals: u8) -> String {
    let factor = 10_f64.powi(i32::from(decimals));
    let rounded = (value * factor).round() / factor;
    let mut out = String::new();
    let _ = write!(out, "{rounded:.prec$}", prec = usize::from(decimals));
    out
}

/// Formats an optional measurement with a unit suffix, or
/// [`NOT_AVAILABLE`] when it is missing or `NaN`.
#[must_use]
pub fn measurement(value: Option<f64>, decimals: u8, unit: &str) -> String {
    value
        .filter(|v| !v.is_nan())
        .map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{}{unit}", fixed(v, decimals)))
}

/// Escapes text for inclusion in HTML element content.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(123_456), "123,456");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn fixed_rounds_half_away_from_zero() {
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(71.49, 0), "71");
        assert_eq!(fixed(14.25, 1), "14.3");
        assert_eq!(fixed(-3.25, 1), "-3.3");
        assert_eq!(fixed(0.0, 1), "0.0");
        assert_eq!(fixed(1013.0, 1), "1013.0");
    }

    #[test]
    fn fixed_rounds_the_scaled_value() {
        assert_eq!(fixed(0.15, 1), "0.2");
        assert_eq!(fixed(-0.15, 1), "-0.2");
        assert_eq!(fixed(2.675, 2), "2.68");
    }

    #[test]
    fn measurement_sentinel() {
        assert_eq!(measurement(Some(21.44), 1, "°C"), "21.4°C");
        assert_eq!(measurement(Some(0.0), 1, "°C"), "0.0°C");
        assert_eq!(measurement(None, 1, "°C"), NOT_AVAILABLE);
        assert_eq!(measurement(Some(f64::NAN), 0, "%"), NOT_AVAILABLE);
    }

    #[test]
    fn escapes_markup() {
        assert!(matches!(escape_html("France"), Cow::Borrowed("France")));
        assert_eq!(
            escape_html("<b>Côte d'Ivoire & co</b>"),
            "&lt;b&gt;Côte d&#39;Ivoire &amp; co&lt;/b&gt;"
        );
    }
}
