//! # Training a small MLP on XOR
//!
//! Builds a 2-4-4-1 tanh network, trains it with plain SGD on the four XOR
//! points (false = -1, true = +1) using a summed squared-error loss, and
//! prints the predictions.
//!
//! Run with `cargo run --example xor`; set `RUST_LOG=debug` to see the
//! engine's backward-pass logging.

use gradrust_core::model::Mlp;
use gradrust_core::nn::{MSELoss, Module, Reduction};
use gradrust_core::optim::{Optimizer, SgdOptimizer};
use gradrust_core::{value_matrix, GradRustError};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPOCHS: usize = 2000;
const LEARNING_RATE: f64 = 0.01;
const SEED: u64 = 42;

fn main() -> Result<(), GradRustError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let raw_inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = [-1.0, 1.0, 1.0, -1.0];
    let inputs = value_matrix(&raw_inputs);

    println!("XOR dataset:");
    for (x, y) in raw_inputs.iter().zip(&targets) {
        println!("({}, {}) -> {}", x[0], x[1], y);
    }

    let mut rng = StdRng::seed_from_u64(SEED);
    let mlp = Mlp::new(2, &[4, 4, 1], &mut rng)?;
    println!(
        "\nMLP with {} layers and {} parameters",
        mlp.layers().len(),
        mlp.num_parameters()
    );

    let loss_fn = MSELoss::new(Reduction::Sum);
    let mut optim = SgdOptimizer::new(mlp.parameters(), LEARNING_RATE);

    for epoch in 0..EPOCHS {
        let predictions = inputs
            .iter()
            .map(|x| mlp.forward_scalar(x))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = loss_fn.calculate(&predictions, &targets)?;

        optim.zero_grad();
        loss.backward();
        optim.step();

        if (epoch + 1) % 100 == 0 {
            info!("epoch {} loss {:.6}", epoch + 1, loss.data());
        }
    }

    println!("\nTesting the model:");
    let mut max_error: f64 = 0.0;
    for ((raw, leaves), y) in raw_inputs.iter().zip(&inputs).zip(&targets) {
        let prediction = mlp.forward_scalar(leaves)?.data();
        max_error = max_error.max((prediction - y).abs());
        println!(
            "({}, {}) -> actual: {} prediction: {:.4}",
            raw[0], raw[1], y, prediction
        );
    }
    println!("\nmax |error| = {:.4}", max_error);
    Ok(())
}
