use crate::value::Value;
use crate::value_data::ValueData;
use log::trace;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a node: the address of its shared state. Only ever compared or
/// hashed, never dereferenced.
pub type NodeId = *const RefCell<ValueData>;

/// Orders every node reachable from `root` so that each node comes after all
/// of its inputs (depth-first post-order). Shared sub-nodes appear once.
///
/// The traversal keeps an explicit stack so that long chains, such as a loss
/// summed over many samples, cannot overflow the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, inputs already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        trace!("[topological_sort] visiting {:?}", node.node_id());

        let inputs = node.inputs();
        stack.push((node, true));
        // Reversed so the first input is visited first.
        for input in inputs.into_iter().rev() {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    sorted_list
}
