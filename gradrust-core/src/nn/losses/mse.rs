use crate::error::GradRustError;
use crate::ops::reduction::sum_op;
use crate::value::Value;

/// Specifies the reduction to apply to the squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

/// Squared-error loss between predicted nodes and numeric targets.
///
/// The result is an ordinary node, so calling `backward` on it trains
/// whatever produced the predictions.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `Σ (pᵢ - tᵢ)²`, divided by the count for `Reduction::Mean`.
    ///
    /// # Errors
    /// `ShapeMismatch` if the slices differ in length, `EmptyInput` if they are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, GradRustError> {
        if predictions.len() != targets.len() {
            return Err(GradRustError::ShapeMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }
        let squared: Vec<Value> = predictions
            .iter()
            .zip(targets)
            .map(|(p, &t)| p.sub(t).pow(2.0))
            .collect();
        let total = sum_op(&squared).map_err(|_| GradRustError::EmptyInput {
            operation: "MSELoss::calculate".to_string(),
        })?;

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total.div(predictions.len() as f64),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
