use crate::error::GradRustError;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: layers applied in sequence, each feeding its
/// output vector to the next.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds layers of sizes `in_features -> layer_sizes[0] -> ... -> layer_sizes[n-1]`.
    ///
    /// `Mlp::new(2, &[4, 4, 1], rng)` gives two hidden layers of four neurons
    /// and a single output.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, GradRustError> {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = in_features;
        for &size in layer_sizes {
            layers.push(Layer::new(fan_in, size, rng)?);
            fan_in = size;
        }
        Ok(Mlp { layers })
    }

    pub fn from_layers(layers: Vec<Layer>) -> Self {
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Runs the network and returns its single output.
    ///
    /// # Errors
    /// `ShapeMismatch` if the last layer does not produce exactly one node,
    /// or if an input vector has the wrong length.
    pub fn forward_scalar(&self, inputs: &[Value]) -> Result<Value, GradRustError> {
        let mut outputs = self.forward(inputs)?;
        if outputs.len() != 1 {
            return Err(GradRustError::ShapeMismatch {
                expected: 1,
                actual: outputs.len(),
                operation: "Mlp::forward_scalar".to_string(),
            });
        }
        Ok(outputs.remove(0))
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, GradRustError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }
}
