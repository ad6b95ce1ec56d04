use crate::error::GradRustError;
use crate::nn::init::uniform_;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::reduction::dot_op;
use crate::value::Value;
use rand::Rng;

/// A single unit: `tanh(Σ xᵢ·wᵢ + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `in_features` weights and a bias, all drawn from U[-1, 1).
    pub fn new<R: Rng + ?Sized>(in_features: usize, rng: &mut R) -> Result<Self, GradRustError> {
        let weights = (0..in_features)
            .map(|i| Parameter::new(0.0, Some(format!("weight.{}", i))))
            .collect::<Vec<_>>();
        let bias = Parameter::new(0.0, Some("bias".to_string()));
        for param in weights.iter().chain(std::iter::once(&bias)) {
            uniform_(param, -1.0, 1.0, rng)?;
        }
        Ok(Neuron { weights, bias })
    }

    /// Creates a neuron with fixed weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Parameter::new(w, Some(format!("weight.{}", i))))
                .collect(),
            bias: Parameter::new(bias, Some("bias".to_string())),
        }
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Computes the activation for one input vector.
    ///
    /// # Errors
    /// `ShapeMismatch` if `inputs.len()` differs from the number of weights.
    pub fn call(&self, inputs: &[Value]) -> Result<Value, GradRustError> {
        if inputs.len() != self.weights.len() {
            return Err(GradRustError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::call".to_string(),
            });
        }
        let act = if inputs.is_empty() {
            self.bias.value().clone()
        } else {
            let weights: Vec<Value> = self.weights.iter().map(|w| w.value().clone()).collect();
            dot_op(inputs, &weights)?.add(self.bias.value())
        };
        Ok(act.tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, GradRustError> {
        Ok(vec![self.call(inputs)?])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or("param").to_string(), p))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
