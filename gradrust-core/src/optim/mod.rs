//! Optimizers for training networks built from [`Parameter`](crate::nn::Parameter)s.
//!
//! This module provides the [`Optimizer`] trait and plain stochastic gradient
//! descent.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
