use crate::autograd::BackwardOp;
use crate::operand::Operand;
use crate::ops::OpKind;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward context for multiplication.
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for MulBackward {
    /// d(a*b)/da = b, d(a*b)/db = a.
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let grad_a = self.b.data() * grad_output;
        let grad_b = self.a.data() * grad_output;
        vec![grad_a, grad_b]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Computes `a * b`.
pub fn mul_op(a: &Value, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    let data = a.data() * b.data();
    let backward = MulBackward { a: a.clone(), b };
    Value::from_data(ValueData::from_op(data, OpKind::Mul, Rc::new(backward)))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
