//! Keypad calculator arithmetic.
//!
//! Operators apply strictly left to right with no precedence, the way a
//! pocket calculator chains them. Each intermediate total is trimmed to
//! [`DISPLAY_DIGITS`] significant digits before the next step.

use crate::number::{display_number, round_significant};
use crate::{Calculation, CalculatorStep, Error, Operator, Result};

/// Significant digits kept for every displayed total.
pub const DISPLAY_DIGITS: usize = 10;

/// Apply a single operator.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] when dividing by zero.
pub fn apply(lhs: f64, operator: Operator, rhs: f64) -> Result<f64> {
    let result = match operator {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide if rhs == 0.0 => return Err(Error::DivisionByZero),
        Operator::Divide => lhs / rhs,
    };
    Ok(round_significant(result, DISPLAY_DIGITS))
}

/// Evaluate `first` followed by each step in order.
///
/// An empty chain leaves `first` unchanged.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] as soon as a step divides by zero.
pub fn evaluate(first: f64, steps: &[CalculatorStep]) -> Result<Calculation> {
    let value = steps
        .iter()
        .try_fold(first, |total, step| apply(total, step.operator, step.operand))?;

    Ok(Calculation {
        value,
        display: display_number(value),
    })
}
