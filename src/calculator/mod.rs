//! Calculator module with the numeric primitives behind the calculator.
//!
//! This module provides functionality to:
//! - Perform arithmetic, powers, roots and degree-based trigonometry
//! - Validate typed operands and format results for display
//! - Apply named operations to operand text

mod arithmetic;
mod error;
mod evaluation;
mod formatting;
mod power;
mod trig;
mod validation;

pub use arithmetic::{add, divide, multiply, subtract};
pub use error::{CalcError, CalcResult};
pub use evaluation::{Evaluation, Operation, evaluate, evaluate_tokens};
pub use formatting::format_result;
pub use power::{cube, sqrt, square};
pub use trig::{TRIG_TOLERANCE, cos, degrees_to_radians, sin};
pub use validation::{INVALID_NUMBER_MESSAGE, ValidationResult, looks_like_number, validate_input};
