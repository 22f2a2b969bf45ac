//! Numeric operations behind a basic calculator.
//!
//! Everything in [`calculator`] is a pure function; [`config`] only serves
//! the command-line front end.

pub mod calculator;
pub mod config;

pub use calculator::{CalcError, CalcResult, Evaluation, Operation};
pub use config::Config;
