//! Backward-pass machinery: the [`BackwardOp`] trait implemented by every
//! primitive, the topological ordering of the graph, and a finite-difference
//! gradient checker.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
