use crate::error::GradRustError;
use crate::value::create::values;
use crate::value::Value;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Gradient for input {input_index} is NaN or infinite (analytical {analytical_grad}, numerical {numerical_grad})")]
    NonFinite {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradRustError),
}

impl From<GradRustError> for GradCheckError {
    fn from(err: GradRustError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against forward finite differences.
///
/// `func` builds an expression from fresh leaves holding `inputs`. The
/// analytical gradient of each leaf comes from one backward pass; the
/// numerical one is `(f(x + epsilon) - f(x)) / epsilon`, perturbing one input
/// at a time on a freshly built graph.
///
/// Returns the analytical gradients when every input agrees within `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, GradRustError>,
{
    let leaves = values(inputs);
    let output = func(&leaves)?;
    output.backward();
    let base = output.data();
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let mut perturbed = inputs.to_vec();
        perturbed[input_index] += epsilon;
        let shifted = func(&values(&perturbed))?.data();
        let numerical_grad = (shifted - base) / epsilon;

        if !analytical_grad.is_finite() || !numerical_grad.is_finite() {
            return Err(GradCheckError::NonFinite {
                input_index,
                analytical_grad,
                numerical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            input_index, analytical_grad, numerical_grad, difference
        );
        if difference > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(analytical)
}
