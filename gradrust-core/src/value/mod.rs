//! The [`Value`] handle: one scalar node of a computation graph.
//!
//! The implementation is split the same way for every concern:
//! - `create`: leaves and the slice/matrix helpers.
//! - `accessors`: reading and overwriting data, gradient and metadata.
//! - `autograd_methods`: gradient accumulation and the backward pass.
//! - `traits`: `Clone`, `Debug`, `Display` and the `std::ops` operators.

use crate::autograd::graph::NodeId;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

pub mod accessors;
pub mod autograd_methods;
pub mod create;
pub mod op_methods;
pub mod traits;

pub use create::{value_matrix, values};

/// A shared handle to a scalar node.
///
/// Cloning a `Value` is shallow: both handles point to the same node, so a
/// gradient accumulated through one is visible through the other. This is how
/// model parameters outlive the per-forward-pass graphs that reference them.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Borrows the node state immutably.
    pub fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the node state mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Stable identity of the node, shared by all clones of this handle.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
