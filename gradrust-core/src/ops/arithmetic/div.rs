use crate::operand::Operand;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Computes `a / b` as `a * b^-1`.
///
/// Division by a zero-valued node follows IEEE semantics (infinite or NaN
/// results), as does its gradient.
pub fn div_op(a: &Value, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    mul_op(a, pow_op(&b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
