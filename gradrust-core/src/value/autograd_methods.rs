use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::value::Value;
use log::debug;
use std::rc::Rc;

impl Value {
    /// Adds `grad_to_add` to this node's gradient. Gradients are only ever
    /// accumulated, so a node feeding several consumers sums their contributions.
    pub fn acc_grad(&self, grad_to_add: f64) {
        self.write_data().grad += grad_to_add;
    }

    /// Returns the backward context of this node, `None` for leaves.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Sets this node's gradient to 1 and propagates through every node
    /// reachable from it in reverse topological order, so each node's
    /// gradient is complete before it is pushed to its inputs.
    ///
    /// Gradients of the other nodes are accumulated onto whatever they hold;
    /// reset them first (see [`Value::zero_grad_all`]) when reusing nodes
    /// across passes.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} nodes reachable from {:?}",
            sorted_nodes.len(),
            self.op()
        );

        self.write_data().grad = 1.0;

        for node in sorted_nodes.iter().rev() {
            let (grad_fn, grad_output) = {
                let guard = node.read_data();
                (guard.grad_fn.clone(), guard.grad)
            };
            let Some(op) = grad_fn else {
                continue;
            };

            let input_grads = op.backward(grad_output);
            for (input, grad) in op.inputs().iter().zip(input_grads) {
                input.acc_grad(grad);
            }
        }
    }

    /// Resets the gradient of every node reachable from this one, itself included.
    pub fn zero_grad_all(&self) {
        for node in topological_sort(self) {
            node.zero_grad();
        }
    }
}
