use crate::operand::Operand;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Computes `a - b` as `a + (-b)`.
pub fn sub_op(a: &Value, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    add_op(a, neg_op(&b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
