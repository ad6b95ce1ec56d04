use crate::autograd::BackwardOp;
use crate::operand::Operand;
use crate::ops::OpKind;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward context for addition. Both inputs receive the output gradient unchanged.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Computes `a + b`.
pub fn add_op(a: &Value, b: impl Into<Operand>) -> Value {
    let b = b.into().into_value();
    let data = a.data() + b.data();
    let backward = AddBackward { a: a.clone(), b };
    Value::from_data(ValueData::from_op(data, OpKind::Add, Rc::new(backward)))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
