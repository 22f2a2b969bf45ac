//! Input validation for calculator operands.
//!
//! Turns raw typed text into a number the primitives can use, or a
//! rejection carrying a fixed message. Parsing is permissive: the longest
//! numeric prefix wins and anything after it is ignored, so `"12a34"` reads
//! as `12`.

use lazy_static::lazy_static;
use regex::Regex;
use super::formatting::serialize_optional_number;
use serde::Serialize;
use tracing::trace;

/// Message reported for every rejected input ("please enter a valid number").
pub const INVALID_NUMBER_MESSAGE: &str = "請輸入有效的數字";

lazy_static! {
    /// Longest decimal literal at the start of a string.
    /// Allows: sign, `Infinity`, digits with optional fraction, exponent.
    static ref NUMBER_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();

    /// Whole-string numeric literal, including `Infinity` and the bare `.`
    /// typing state.
    static ref PLAIN_NUMBER: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]*)(?:[eE][+-]?[0-9]+)?)$"
    ).unwrap();
}

/// Outcome of validating one operand.
///
/// Exactly one of `error_message` and `value` is present, matching
/// `is_valid`. The fields are only reachable through accessors so the
/// pairing cannot drift.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    error_message: Option<String>,
    #[serde(serialize_with = "serialize_optional_number")]
    value: Option<f64>,
}

impl ValidationResult {
    /// Accepted input with its parsed value.
    pub fn valid(value: f64) -> Self {
        Self {
            is_valid: true,
            error_message: None,
            value: Some(value),
        }
    }

    /// Rejected input with the reason shown to the user.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
            value: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Validate a raw operand string.
///
/// 1. A single redundant leading zero is dropped (`"012"` becomes `"12"`,
///    `"0.5"` is left alone).
/// 2. More than one `.` is rejected.
/// 3. The longest numeric prefix is parsed; nothing parseable is rejected,
///    except for a lone `"."`, which is accepted with a NaN value.
///
/// Never fails: rejection is reported through the returned result.
pub fn validate_input(input: &str) -> ValidationResult {
    let input = strip_redundant_zero(input);

    if input.matches('.').count() > 1 {
        trace!(input, "rejecting input with multiple decimal points");
        return ValidationResult::invalid(INVALID_NUMBER_MESSAGE);
    }

    let value = parse_number_prefix(input);
    if value.is_nan() && input != "." {
        trace!(input, "rejecting non-numeric input");
        return ValidationResult::invalid(INVALID_NUMBER_MESSAGE);
    }

    ValidationResult::valid(value)
}

/// Check if the whole input reads as a plain number.
///
/// Stricter than [`validate_input`]: trailing garbage is not allowed. Used to
/// tell operands from operation names in a token list.
pub fn looks_like_number(input: &str) -> bool {
    PLAIN_NUMBER.is_match(input.trim())
}

fn strip_redundant_zero(input: &str) -> &str {
    let bytes = input.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' && bytes[1] != b'.' {
        &input[1..]
    } else {
        input
    }
}

/// Whitespace skipped before a number: tab, vertical tab, form feed, line
/// terminators, BOM and the Unicode space separators. NEL (U+0085) is not
/// included.
fn is_leading_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Parse as much of a leading number as possible, NaN if there is none.
fn parse_number_prefix(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(is_leading_space);

    let Some(found) = NUMBER_PREFIX.find(trimmed) else {
        return f64::NAN;
    };

    match found.as_str() {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        literal => literal.parse().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        let result = validate_input("123");
        assert!(result.is_valid());
        assert_eq!(result.value(), Some(123.0));
        assert_eq!(result.error_message(), None);

        assert_eq!(validate_input("12.34").value(), Some(12.34));
        assert_eq!(validate_input("-5").value(), Some(-5.0));
        assert_eq!(validate_input("0.5").value(), Some(0.5));
        assert_eq!(validate_input("1e3").value(), Some(1000.0));
        assert_eq!(validate_input("  42").value(), Some(42.0));
    }

    #[test]
    fn test_leading_zero_stripped_once() {
        assert_eq!(validate_input("012").value(), Some(12.0));
        assert_eq!(validate_input("007").value(), Some(7.0));
        assert_eq!(validate_input("0").value(), Some(0.0));
        assert_eq!(validate_input("0.").value(), Some(0.0));
    }

    #[test]
    fn test_multiple_decimal_points_rejected() {
        let result = validate_input("12.34.56");
        assert!(!result.is_valid());
        assert_eq!(result.error_message(), Some(INVALID_NUMBER_MESSAGE));
        assert_eq!(result.value(), None);
    }

    #[test]
    fn test_non_numeric_rejected() {
        for input in ["abc", "", "-", "e5", "..", " "] {
            let result = validate_input(input);
            assert!(!result.is_valid(), "{input:?} should be rejected");
            assert_eq!(result.error_message(), Some(INVALID_NUMBER_MESSAGE));
        }
    }

    #[test]
    fn test_prefix_parsing() {
        assert_eq!(validate_input("12a34").value(), Some(12.0));
        assert_eq!(validate_input("3.5kg").value(), Some(3.5));
        assert_eq!(validate_input("1e").value(), Some(1.0));
        assert_eq!(validate_input("2e-2x").value(), Some(0.02));
        assert_eq!(validate_input("Infinity").value(), Some(f64::INFINITY));
        assert_eq!(validate_input("-Infinityx").value(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_lone_dot_is_in_progress() {
        let result = validate_input(".");
        assert!(result.is_valid());
        assert_eq!(result.error_message(), None);
        assert!(result.value().is_some_and(f64::is_nan));
    }

    #[test]
    fn test_looks_like_number() {
        assert!(looks_like_number("12"));
        assert!(looks_like_number("-3.5"));
        assert!(looks_like_number("."));
        assert!(looks_like_number("1e-3"));
        assert!(!looks_like_number("+"));
        assert!(!looks_like_number("-"));
        assert!(!looks_like_number("sqrt"));
        assert!(!looks_like_number("12a34"));
        assert!(!looks_like_number("^2"));
        assert!(looks_like_number("Infinity"));
        assert!(looks_like_number("-Infinity"));
        assert!(!looks_like_number("Infinityx"));
    }

    #[test]
    fn test_leading_space_set() {
        assert_eq!(validate_input("\t\n 5").value(), Some(5.0));
        assert_eq!(validate_input("\u{a0}5").value(), Some(5.0));
        assert_eq!(validate_input("\u{2028}7").value(), Some(7.0));
        assert_eq!(validate_input("\u{3000}8").value(), Some(8.0));
        assert_eq!(validate_input("\u{feff}9").value(), Some(9.0));

        let result = validate_input("\u{85}5");
        assert!(!result.is_valid());
        assert_eq!(result.error_message(), Some(INVALID_NUMBER_MESSAGE));
    }

    #[test]
    fn test_json_keeps_value_for_lone_dot() {
        let json = serde_json::to_string(&validate_input(".")).unwrap();
        assert_eq!(json, r#"{"is_valid":true,"error_message":null,"value":"NaN"}"#);

        let json = serde_json::to_string(&validate_input("abc")).unwrap();
        assert_eq!(
            json,
            r#"{"is_valid":false,"error_message":"請輸入有效的數字","value":null}"#
        );
    }
}
