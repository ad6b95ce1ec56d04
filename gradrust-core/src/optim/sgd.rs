use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use log::debug;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum and weight decay. With both left at zero the update is
/// `p ← p − lr · ∂L/∂p`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One velocity per parameter, same order as `params`.
    momentum_buffers: Vec<f64>,
    steps: usize,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` over `params` with learning rate `lr`.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Self {
        let params: Vec<Parameter> = params.into_iter().collect();
        let momentum_buffers = vec![0.0; params.len()];
        SgdOptimizer {
            params,
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            momentum_buffers,
            steps: 0,
        }
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    /// L2 penalty factor added to each gradient.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Number of `step` calls so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) {
        for (param, velocity) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * param.data();
            }
            if self.momentum != 0.0 {
                *velocity = self.momentum * *velocity + d_p;
                d_p = *velocity;
            }
            param.set_data(param.data() - self.lr * d_p);
        }
        self.steps += 1;
        debug!(
            "SGD step {}: updated {} parameters (lr={})",
            self.steps,
            self.params.len(),
            self.lr
        );
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}
