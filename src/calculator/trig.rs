//! Trigonometry on degree inputs.

use std::f64::consts::PI;

/// Tolerance used when checking trigonometric identities.
pub const TRIG_TOLERANCE: f64 = 1e-10;

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Sine of an angle given in degrees.
pub fn sin(degrees: f64) -> f64 {
    degrees_to_radians(degrees).sin()
}

/// Cosine of an angle given in degrees.
pub fn cos(degrees: f64) -> f64 {
    degrees_to_radians(degrees).cos()
}
