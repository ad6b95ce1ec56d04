use crate::autograd::BackwardOp;
use crate::ops::OpKind;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward context for the hyperbolic tangent. Caches `tanh(a)` so the
/// derivative `1 - tanh(a)^2` is not recomputed from the input.
#[derive(Debug)]
struct TanhBackward {
    a: Value,
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![(1.0 - self.output * self.output) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone()]
    }
}

// --- Forward Operation ---

/// Applies the hyperbolic tangent.
pub fn tanh_op(a: &Value) -> Value {
    let output = a.data().tanh();
    let backward = TanhBackward {
        a: a.clone(),
        output,
    };
    Value::from_data(ValueData::from_op(output, OpKind::Tanh, Rc::new(backward)))
}
