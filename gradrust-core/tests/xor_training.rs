mod common;

use gradrust_core::model::Mlp;
use gradrust_core::nn::Module;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn xor_converges_within_tolerance() {
    common::init_logger();
    let (inputs, targets) = common::xor_dataset();
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::new(2, &[4, 4, 1], &mut rng).expect("model");

    let final_loss = common::train(&mlp, &inputs, &targets, 2000, 0.05).expect("training");
    assert!(final_loss < 0.1, "final loss {}", final_loss);

    for (x, &y) in inputs.iter().zip(&targets) {
        let prediction = mlp.forward_scalar(x).expect("forward").data();
        assert!(
            (prediction - y).abs() < 0.1,
            "({}, {}) -> expected {}, predicted {}",
            x[0].data(),
            x[1].data(),
            y,
            prediction
        );
    }
}

#[test]
fn training_only_moves_parameters() {
    let (inputs, targets) = common::xor_dataset();
    let mut rng = StdRng::seed_from_u64(4);
    let mlp = Mlp::new(2, &[4, 1], &mut rng).expect("model");
    let before: Vec<f64> = mlp.parameters().iter().map(|p| p.data()).collect();

    common::train(&mlp, &inputs, &targets, 5, 0.05).expect("training");

    let after: Vec<f64> = mlp.parameters().iter().map(|p| p.data()).collect();
    assert_ne!(before, after);
    for row in &inputs {
        for x in row {
            assert!(x.data() == 0.0 || x.data() == 1.0);
        }
    }
}
