//! Folds over slices of nodes, built from the primitives only.

use crate::error::GradRustError;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::Value;

/// Sums the nodes left to right.
///
/// # Errors
/// `EmptyInput` if `inputs` is empty.
pub fn sum_op(inputs: &[Value]) -> Result<Value, GradRustError> {
    let (first, rest) = inputs.split_first().ok_or_else(|| GradRustError::EmptyInput {
        operation: "sum_op".to_string(),
    })?;
    Ok(rest.iter().fold(first.clone(), |acc, x| add_op(&acc, x)))
}

/// Computes `Σ xᵢ·wᵢ`.
///
/// # Errors
/// `ShapeMismatch` if the slices differ in length, `EmptyInput` if both are empty.
pub fn dot_op(xs: &[Value], ws: &[Value]) -> Result<Value, GradRustError> {
    if xs.len() != ws.len() {
        return Err(GradRustError::ShapeMismatch {
            expected: ws.len(),
            actual: xs.len(),
            operation: "dot_op".to_string(),
        });
    }
    let products: Vec<Value> = xs.iter().zip(ws).map(|(x, w)| mul_op(x, w)).collect();
    sum_op(&products).map_err(|_| GradRustError::EmptyInput {
        operation: "dot_op".to_string(),
    })
}
