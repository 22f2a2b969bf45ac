//! Display formatting for calculator results.

use serde::Serializer;

/// Decimal places kept in a displayed result.
const DISPLAY_DECIMALS: usize = 6;

/// Magnitude from which numbers are shown in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Format a result for display.
///
/// Infinity of either sign shows as `"Infinity"` and NaN as `"NaN"`.
/// Anything else is rounded to six decimal places and printed in its
/// shortest form, so `20.000000` shows as `"20"` and `1/3` as `"0.333333"`.
pub fn format_result(value: f64) -> String {
    if value.is_infinite() {
        return "Infinity".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }

    let rounded: f64 = to_fixed(value).parse().unwrap_or(value);
    canonical(rounded)
}

/// Serialize a finite value as a number and NaN or infinity as its display
/// text, since JSON has no literal for them.
pub(crate) fn serialize_number<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_result(*value))
    }
}

pub(crate) fn serialize_optional_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serialize_number(value, serializer),
        None => serializer.serialize_none(),
    }
}

/// Round to [`DISPLAY_DECIMALS`] places using the exact decimal value of
/// `value`, resolving exact ties away from zero.
fn to_fixed(value: f64) -> String {
    if value.abs() >= EXPONENT_THRESHOLD {
        return canonical(value);
    }

    // An exact tie at the seventh decimal needs a value of the form k/128
    // with k odd; std formatting would round those to even.
    let scaled = value.abs() * 128.0;
    if scaled.fract() == 0.0 && scaled % 2.0 == 1.0 {
        let k = scaled as u128;
        let micros = (k * 15_625 + 1) / 2;
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{}{}.{:06}", sign, micros / 1_000_000, micros % 1_000_000);
    }

    format!("{:.*}", DISPLAY_DECIMALS, value)
}

/// Shortest decimal text that reads back as `value`.
fn canonical(value: f64) -> String {
    if value == 0.0 {
        // Covers negative zero too.
        return "0".to_string();
    }

    if value.abs() >= EXPONENT_THRESHOLD {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_values() {
        assert_eq!(format_result(f64::INFINITY), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY), "Infinity");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn test_integers() {
        assert_eq!(format_result(20.0), "20");
        assert_eq!(format_result(-4.0), "-4");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(1_000_000.0), "1000000");
    }

    #[test]
    fn test_decimals_rounded_and_trimmed() {
        assert_eq!(format_result(1.0 / 3.0), "0.333333");
        assert_eq!(format_result(2.0 / 3.0), "0.666667");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(3.1), "3.1");
        assert_eq!(format_result(-1.25), "-1.25");
    }

    #[test]
    fn test_tiny_values_collapse() {
        assert_eq!(format_result(1e-7), "0");
        assert_eq!(format_result(-1e-7), "0");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(0.000001), "0.000001");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_result(0.0078125), "0.007813");
        assert_eq!(format_result(-0.0078125), "-0.007813");
        assert_eq!(format_result(1.0078125), "1.007813");
    }

    #[test]
    fn test_large_values() {
        assert_eq!(format_result(1e20), "100000000000000000000");
        assert_eq!(format_result(1e21), "1e+21");
        assert_eq!(format_result(-1.5e22), "-1.5e+22");
    }

    #[test]
    fn test_serialize_non_finite_as_text() {
        let mut out = Vec::new();
        serialize_number(&f64::NAN, &mut serde_json::Serializer::new(&mut out)).unwrap();
        assert_eq!(out, b"\"NaN\"");

        let mut out = Vec::new();
        serialize_optional_number(
            &Some(f64::NEG_INFINITY),
            &mut serde_json::Serializer::new(&mut out),
        )
        .unwrap();
        assert_eq!(out, b"\"Infinity\"");

        let mut out = Vec::new();
        serialize_optional_number(&Some(2.5), &mut serde_json::Serializer::new(&mut out)).unwrap();
        assert_eq!(out, b"2.5");
    }

    #[test]
    fn test_trig_results() {
        assert_eq!(format_result(crate::calculator::sin(30.0)), "0.5");
        assert_eq!(format_result(crate::calculator::cos(60.0)), "0.5");
    }
}
