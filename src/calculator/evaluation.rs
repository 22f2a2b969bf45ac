//! Applying operations to validated operands.
//!
//! Maps operation names and symbols onto the numeric primitives and wraps
//! the outcome with a display string, so a front end only has to show text.

use super::arithmetic::{add, divide, multiply, subtract};
use super::error::{CalcError, CalcResult};
use super::formatting::{format_result, serialize_number};
use super::power::{cube, sqrt, square};
use super::trig::{cos, sin};
use super::validation::{looks_like_number, validate_input};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A calculator operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Square,
    Cube,
    Sqrt,
    Sin,
    Cos,
}

/// Accepted spellings for each operation, matched case-insensitively.
const OPERATION_ALIASES: &[(&str, Operation)] = &[
    ("add", Operation::Add),
    ("plus", Operation::Add),
    ("+", Operation::Add),
    ("subtract", Operation::Subtract),
    ("sub", Operation::Subtract),
    ("minus", Operation::Subtract),
    ("-", Operation::Subtract),
    ("multiply", Operation::Multiply),
    ("mul", Operation::Multiply),
    ("times", Operation::Multiply),
    ("*", Operation::Multiply),
    ("x", Operation::Multiply),
    ("×", Operation::Multiply),
    ("divide", Operation::Divide),
    ("div", Operation::Divide),
    ("/", Operation::Divide),
    ("÷", Operation::Divide),
    ("square", Operation::Square),
    ("sq", Operation::Square),
    ("^2", Operation::Square),
    ("²", Operation::Square),
    ("cube", Operation::Cube),
    ("^3", Operation::Cube),
    ("³", Operation::Cube),
    ("sqrt", Operation::Sqrt),
    ("√", Operation::Sqrt),
    ("sin", Operation::Sin),
    ("cos", Operation::Cos),
];

impl Operation {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }

    /// Number of operands the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide => 2,
            Self::Square | Self::Cube | Self::Sqrt | Self::Sin | Self::Cos => 1,
        }
    }

    /// Apply the operation to already-parsed operands.
    pub fn apply(self, operands: &[f64]) -> CalcResult<f64> {
        debug!(operation = self.name(), ?operands, "applying operation");

        match (self, operands) {
            (Self::Add, &[a, b]) => Ok(add(a, b)),
            (Self::Subtract, &[a, b]) => Ok(subtract(a, b)),
            (Self::Multiply, &[a, b]) => Ok(multiply(a, b)),
            (Self::Divide, &[a, b]) => divide(a, b),
            (Self::Square, &[x]) => Ok(square(x)),
            (Self::Cube, &[x]) => Ok(cube(x)),
            (Self::Sqrt, &[x]) => sqrt(x),
            (Self::Sin, &[x]) => Ok(sin(x)),
            (Self::Cos, &[x]) => Ok(cos(x)),
            _ => Err(CalcError::Arity {
                operation: self.name(),
                expected: self.arity(),
                found: operands.len(),
            }),
        }
    }

    /// Human-readable rendering of the operation over operand texts.
    fn render(self, operands: &[String]) -> String {
        match (self, operands) {
            (Self::Add, [a, b]) => format!("{} + {}", a, b),
            (Self::Subtract, [a, b]) => format!("{} - {}", a, b),
            (Self::Multiply, [a, b]) => format!("{} × {}", a, b),
            (Self::Divide, [a, b]) => format!("{} ÷ {}", a, b),
            (Self::Square, [x]) => format!("{}²", x),
            (Self::Cube, [x]) => format!("{}³", x),
            (Self::Sqrt, [x]) => format!("√{}", x),
            (Self::Sin, [x]) => format!("sin({}°)", x),
            (Self::Cos, [x]) => format!("cos({}°)", x),
            _ => format!("{}({})", self.name(), operands.join(", ")),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        OPERATION_ALIASES
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map(|&(_, op)| op)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

/// Result of evaluating an operation.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// The operation produced a number.
    Success {
        /// Rendered expression, e.g. `12 + 8`.
        expression: String,
        /// The raw numeric value.
        #[serde(serialize_with = "serialize_number")]
        value: f64,
        /// The value formatted for display.
        display: String,
    },
    /// An operand was rejected or the operation failed.
    Error {
        /// Rendered expression (or the raw input if it could not be read).
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl Evaluation {
    fn error(expression: String, message: impl fmt::Display) -> Self {
        Self::Error {
            expression,
            message: message.to_string(),
        }
    }

    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display, .. } => display,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the numeric value (only for successful results).
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }
}

/// Validate the operand texts, apply `operation` and format the result.
///
/// The first rejected operand decides the error message.
pub fn evaluate<S: AsRef<str>>(operation: Operation, operands: &[S]) -> Evaluation {
    let mut values = Vec::with_capacity(operands.len());
    for operand in operands {
        let checked = validate_input(operand.as_ref());
        match checked.value() {
            Some(value) => values.push(value),
            None => {
                let message = checked.error_message().unwrap_or_default().to_string();
                return Evaluation::error(join_raw(operation, operands), message);
            }
        }
    }

    let shown: Vec<String> = values.iter().map(|&v| format_result(v)).collect();
    let expression = operation.render(&shown);

    match operation.apply(&values) {
        Ok(value) => Evaluation::Success {
            display: format_result(value),
            expression,
            value,
        },
        Err(e) => Evaluation::error(expression, e),
    }
}

/// Evaluate a token list such as `["12", "+", "8"]` or `["sqrt", "16"]`.
///
/// Tokens that read as plain numbers are operands; exactly one other token
/// must name the operation.
pub fn evaluate_tokens<S: AsRef<str>>(tokens: &[S]) -> Evaluation {
    match split_tokens(tokens) {
        Ok((operation, operands)) => evaluate(operation, &operands),
        Err(e) => {
            let raw: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
            Evaluation::error(raw.join(" "), e)
        }
    }
}

fn split_tokens<S: AsRef<str>>(tokens: &[S]) -> CalcResult<(Operation, Vec<&str>)> {
    let (numbers, names): (Vec<&str>, Vec<&str>) = tokens
        .iter()
        .map(AsRef::as_ref)
        .partition(|token| looks_like_number(token));

    match names.as_slice() {
        [name] => Ok((name.parse()?, numbers)),
        _ => {
            let raw: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
            Err(CalcError::MalformedExpression(raw.join(" ")))
        }
    }
}

fn join_raw<S: AsRef<str>>(operation: Operation, operands: &[S]) -> String {
    let raw: Vec<String> = operands.iter().map(|s| s.as_ref().to_string()).collect();
    operation.render(&raw)
}
