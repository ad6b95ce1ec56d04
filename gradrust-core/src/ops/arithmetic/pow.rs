use crate::autograd::BackwardOp;
use crate::ops::OpKind;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward context for `base ^ exponent` with a constant exponent.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    /// d(x^p)/dx = p * x^(p-1).
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let local = self.exponent * self.base.data().powf(self.exponent - 1.0);
        vec![local * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Forward Operation ---

/// Raises `base` to a constant power. The exponent is not a node and receives
/// no gradient.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let data = base.data().powf(exponent);
    let backward = PowBackward {
        base: base.clone(),
        exponent,
    };
    Value::from_data(ValueData::from_op(
        data,
        OpKind::Pow(exponent),
        Rc::new(backward),
    ))
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
