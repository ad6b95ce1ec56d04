use crate::ops::OpKind;
use crate::value::Value;
use log::warn;

impl Value {
    /// Current value of the node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Gradient accumulated by the last backward pass(es).
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the value. Intended for parameter updates on leaves.
    ///
    /// Nodes computed from this one keep the value they were built with; the
    /// next forward pass picks up the new value.
    pub fn set_data(&self, data: f64) {
        let mut guard = self.write_data();
        if guard.grad_fn.is_some() {
            warn!(
                "set_data on a non-leaf node ({:?}); downstream nodes are not recomputed",
                guard.op
            );
        }
        guard.data = data;
    }

    /// Resets the accumulated gradient to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: &str) {
        self.write_data().label = Some(label.to_string());
    }

    /// The primitive that produced this node.
    pub fn op(&self) -> OpKind {
        self.read_data().op
    }

    /// The nodes this node was computed from (0, 1 or 2 of them).
    pub fn inputs(&self) -> Vec<Value> {
        match self.read_data().grad_fn.as_ref() {
            Some(grad_fn) => grad_fn.inputs(),
            None => Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }
}
