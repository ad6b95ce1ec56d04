use super::*;
use crate::value::values;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_new_initialises_in_range() -> Result<(), GradRustError> {
    let mut rng = StdRng::seed_from_u64(1);
    let n = Neuron::new(3, &mut rng)?;
    assert_eq!(n.in_features(), 3);
    assert_eq!(n.parameters().len(), 4);
    for p in n.parameters() {
        assert!((-1.0..1.0).contains(&p.data()));
        assert!(p.is_leaf());
    }
    Ok(())
}

#[test]
fn test_neuron_forward_value() -> Result<(), GradRustError> {
    let n = Neuron::from_weights(&[0.5, -1.0], 0.25);
    let x = values(&[2.0, 3.0]);
    let out = n.call(&x)?;
    assert_relative_eq!(out.data(), (0.5 * 2.0 - 3.0 + 0.25f64).tanh());
    Ok(())
}

#[test]
fn test_neuron_gradients_reach_parameters() -> Result<(), GradRustError> {
    let n = Neuron::from_weights(&[0.5, -1.0], 0.25);
    let x = values(&[2.0, 3.0]);
    let out = n.call(&x)?;
    out.backward();

    let t = out.data();
    let dact = 1.0 - t * t;
    assert_relative_eq!(n.weights()[0].grad(), dact * 2.0);
    assert_relative_eq!(n.weights()[1].grad(), dact * 3.0);
    assert_relative_eq!(n.bias().grad(), dact);
    assert_relative_eq!(x[0].grad(), dact * 0.5);
    Ok(())
}

#[test]
fn test_neuron_input_length_mismatch() {
    let n = Neuron::from_weights(&[0.5, -1.0], 0.0);
    let err = n.call(&values(&[1.0])).unwrap_err();
    assert_eq!(
        err,
        GradRustError::ShapeMismatch {
            expected: 2,
            actual: 1,
            operation: "Neuron::call".to_string()
        }
    );
}

#[test]
fn test_neuron_without_inputs_uses_bias() -> Result<(), GradRustError> {
    let n = Neuron::from_weights(&[], 0.3);
    let out = n.call(&[])?;
    assert_relative_eq!(out.data(), 0.3f64.tanh());
    Ok(())
}

#[test]
fn test_neuron_named_parameters() {
    let n = Neuron::from_weights(&[1.0, 2.0], 3.0);
    let names: Vec<String> = n.named_parameters().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["weight.0", "weight.1", "bias"]);
}
