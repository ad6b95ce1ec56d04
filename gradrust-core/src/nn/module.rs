use crate::error::GradRustError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all network modules (neurons, layers, stacks).
///
/// A forward call only composes engine operations; gradients reach the
/// parameters through the graph it builds.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, producing one output node per unit.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, GradRustError>;

    /// All learnable parameters, including those of sub-modules, in a stable order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Parameters with hierarchical names (e.g. "layers.0.neurons.1.bias").
    fn named_parameters(&self) -> Vec<(String, Parameter)>;

    /// Resets the gradient of every parameter. Must be called between
    /// training steps, as backward passes only accumulate.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Multiplies every input by one parameter.
    #[derive(Debug)]
    struct ScaleModule {
        scale: Parameter,
    }

    impl Module for ScaleModule {
        fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, GradRustError> {
            Ok(inputs.iter().map(|x| x.mul(self.scale.value())).collect())
        }

        fn parameters(&self) -> Vec<Parameter> {
            vec![self.scale.clone()]
        }

        fn named_parameters(&self) -> Vec<(String, Parameter)> {
            let name = self.scale.name().unwrap_or("param").to_string();
            vec![(name, self.scale.clone())]
        }
    }

    #[test]
    fn test_default_zero_grad() -> Result<(), GradRustError> {
        let module = ScaleModule {
            scale: Parameter::new(2.0, Some("scale".to_string())),
        };
        let out = module.forward(&[Value::new(3.0)])?;
        out[0].backward();
        assert_eq!(module.scale.grad(), 3.0);

        module.zero_grad();
        assert_eq!(module.scale.grad(), 0.0);
        assert_eq!(module.num_parameters(), 1);
        assert_eq!(module.named_parameters()[0].0, "scale");
        Ok(())
    }
}
