use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Computes `-a` as `a * -1`; the gradient comes from multiplication.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
