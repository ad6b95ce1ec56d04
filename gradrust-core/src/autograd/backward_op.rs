use crate::value::Value;
use std::fmt::Debug;

/// Defines the backward pass of a differentiable primitive.
///
/// Any operation that creates a non-leaf [`Value`] stores an implementation of
/// this trait in the result's `grad_fn`. It holds the input handles plus any
/// forward-pass results the local derivative needs.
pub trait BackwardOp: Debug {
    /// Computes the contribution to each input's gradient given
    /// `grad_output` = d(root)/d(output).
    ///
    /// The returned vector is ordered like [`BackwardOp::inputs`]. The caller
    /// accumulates each entry into the matching input.
    fn backward(&self, grad_output: f64) -> Vec<f64>;

    /// The input nodes of the operation, in forward-pass order.
    fn inputs(&self) -> Vec<Value>;
}
