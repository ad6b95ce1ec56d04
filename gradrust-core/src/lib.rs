//! # gradrust-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Every [`Value`] holds one `f64`, the gradient accumulated into it during a
//! backward pass, and the context needed to push that gradient back to the
//! nodes it was computed from. Expressions build the graph implicitly:
//!
//! ```
//! use gradrust_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-4.0);
//! let l = (&a * &b + 3.0).tanh();
//! l.backward();
//! assert_eq!(l.grad(), 1.0);
//! ```
//!
//! The [`nn`], [`model`] and [`optim`] modules build a small multi-layer
//! perceptron and its training step on top of the engine.

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod operand;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub mod value_data;

pub use error::GradRustError;
pub use operand::Operand;
pub use ops::OpKind;
pub use value::{value_matrix, values};
pub use value::Value;
