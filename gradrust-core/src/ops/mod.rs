//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable primitive lives in its own file and follows the same
//! shape:
//!
//! - an `xxx_op` function that computes the forward value and links the new
//!   node into the graph;
//! - an `XxxBackward` struct implementing
//!   [`BackwardOp`](crate::autograd::BackwardOp), storing the input handles
//!   and whatever forward results the local derivative needs.
//!
//! Primitives: [`arithmetic`] (`add`, `mul`, `pow`, plus the derived `neg`,
//! `sub`, `div`), [`math_elem`] (`exp`), [`activation`] (`tanh`).
//! [`reduction`] folds slices of nodes using the primitives only.

use std::fmt;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

/// Records which primitive produced a node.
///
/// Only used for diagnostics; the backward pass dispatches through the node's
/// `grad_fn`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    /// Power with a constant exponent.
    Pow(f64),
    Exp,
    Tanh,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Leaf => write!(f, ""),
            OpKind::Add => write!(f, "+"),
            OpKind::Mul => write!(f, "*"),
            OpKind::Pow(p) => write!(f, "**{}", p),
            OpKind::Exp => write!(f, "exp"),
            OpKind::Tanh => write!(f, "tanh"),
        }
    }
}
