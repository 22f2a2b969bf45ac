//! Square, cube and square root.

use super::error::{CalcError, CalcResult};
use tracing::debug;

pub fn square(x: f64) -> f64 {
    x * x
}

/// Third power, computed as a multiply chain so integer inputs stay exact.
pub fn cube(x: f64) -> f64 {
    x * x * x
}

/// Principal (non-negative) square root.
///
/// Negative input fails with [`CalcError::InvalidDomain`]. NaN is not
/// negative and passes through as NaN.
pub fn sqrt(x: f64) -> CalcResult<f64> {
    if x < 0.0 {
        debug!(x, "rejecting square root of negative number");
        return Err(CalcError::InvalidDomain);
    }
    Ok(x.sqrt())
}
