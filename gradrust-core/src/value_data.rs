use crate::autograd::BackwardOp;
use crate::ops::OpKind;
use std::fmt::{self, Debug};
use std::rc::Rc;

/// The shared state behind a [`Value`](crate::Value) handle.
///
/// `data` is fixed when the node is created, except for leaves whose value is
/// overwritten by a parameter update. `grad` starts at zero and only grows by
/// accumulation during a backward pass.
pub struct ValueData {
    /// Result of the operation that produced this node, or the leaf value.
    pub data: f64,
    /// Accumulated d(root)/d(self). Meaningless until a backward pass has run.
    pub grad: f64,
    /// Which primitive produced this node. Diagnostics only.
    pub op: OpKind,
    /// Context needed to propagate `grad` to this node's inputs. `None` for leaves.
    pub grad_fn: Option<Rc<dyn BackwardOp>>,
    /// Optional diagnostic name.
    pub label: Option<String>,
}

impl ValueData {
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: OpKind::Leaf,
            grad_fn: None,
            label: None,
        }
    }

    pub(crate) fn from_op(data: f64, op: OpKind, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            grad_fn: Some(grad_fn),
            label: None,
        }
    }
}

impl Debug for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.op)
            .field("label", &self.label)
            .field("has_grad_fn", &self.grad_fn.is_some())
            .finish()
    }
}
