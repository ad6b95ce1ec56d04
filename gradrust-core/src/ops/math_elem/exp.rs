use crate::autograd::BackwardOp;
use crate::ops::OpKind;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

// --- ExpBackward Definition ---

/// Backward context for `e^a`. Keeps the forward result, which is also the
/// local derivative.
#[derive(Debug)]
struct ExpBackward {
    a: Value,
    result: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.result * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone()]
    }
}

// --- exp_op Implementation ---

/// Computes the natural exponential `e^a`.
pub fn exp_op(a: &Value) -> Value {
    let result = a.data().exp();
    let backward = ExpBackward {
        a: a.clone(),
        result,
    };
    Value::from_data(ValueData::from_op(result, OpKind::Exp, Rc::new(backward)))
}
