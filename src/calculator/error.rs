//! Error type shared by the numeric primitives.

use thiserror::Error;

/// Result alias for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Failures a calculator operation can report.
///
/// Every variant is local to a single call; callers may reset their own
/// state and keep calculating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Divisor was exactly zero.
    #[error("無法除以零")]
    DivisionByZero,

    /// Square root of a negative number.
    #[error("無法對負數開根號")]
    InvalidDomain,

    /// Operation name that does not map to any primitive.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Token list without exactly one operation in it.
    #[error("expected exactly one operation in `{0}`")]
    MalformedExpression(String),

    /// Wrong number of operands for an operation.
    #[error("{operation} expects {expected} operand(s), got {found}")]
    Arity {
        operation: &'static str,
        expected: usize,
        found: usize,
    },
}
