use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a graph node: the address of its shared `RefCell`.
///
/// Only ever compared and hashed, never dereferenced. The `Scalar` handles kept in
/// the sorted list keep every pointed-to node alive for the duration of a backward pass.
pub(crate) type NodeId = *const RefCell<ScalarData>;

/// Builds a topological sort of the computation graph rooted at `root`.
///
/// Nodes are returned in post-order: every node appears after all of its operands.
/// Iterating the result in reverse therefore visits a node only after every consumer
/// of that node has been visited. Nodes reachable through several paths are recorded
/// once, keyed on their `NodeId`.
///
/// The depth-first walk uses an explicit stack, so long chains of operations cannot
/// overflow the call stack.
pub(crate) fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Scalar> = Vec::new();
    // (node, operands_already_scheduled)
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for input in operands.into_iter().rev() {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
