//! The four basic operations.

use super::error::{CalcError, CalcResult};
use tracing::debug;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Fails with [`CalcError::DivisionByZero`] only when `b` is exactly zero
/// (either sign); tiny non-zero divisors are divided normally.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        debug!(a, "rejecting division by zero");
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
