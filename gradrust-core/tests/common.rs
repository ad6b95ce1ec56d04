use gradrust_core::model::Mlp;
use gradrust_core::nn::{MSELoss, Module};
use gradrust_core::optim::{Optimizer, SgdOptimizer};
use gradrust_core::{value_matrix, GradRustError, Value};

// Shared by several test crates; not every helper is used by each of them.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The four XOR points with labels -1 (false) / +1 (true).
#[allow(dead_code)]
pub fn xor_dataset() -> (Vec<Vec<Value>>, Vec<f64>) {
    let x = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    (value_matrix(&x), vec![-1.0, 1.0, 1.0, -1.0])
}

/// Full-batch training with a summed squared-error loss. Returns the loss of
/// the last epoch.
#[allow(dead_code)]
pub fn train(
    mlp: &Mlp,
    inputs: &[Vec<Value>],
    targets: &[f64],
    epochs: usize,
    lr: f64,
) -> Result<f64, GradRustError> {
    let loss_fn = MSELoss::default();
    let mut optim = SgdOptimizer::new(mlp.parameters(), lr);
    let mut last_loss = f64::NAN;
    for _ in 0..epochs {
        let predictions = inputs
            .iter()
            .map(|x| mlp.forward_scalar(x))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = loss_fn.calculate(&predictions, targets)?;
        optim.zero_grad();
        loss.backward();
        optim.step();
        last_loss = loss.data();
    }
    Ok(last_loss)
}
