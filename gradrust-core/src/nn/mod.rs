//! Network building blocks on top of the engine: a [`Neuron`] computes
//! `tanh(Σ xᵢwᵢ + b)`, a [`Layer`] applies several neurons to the same inputs.
//! None of them defines derivative rules; gradients come from the ops they call.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use layers::{Layer, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
