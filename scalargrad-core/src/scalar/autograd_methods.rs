use super::Scalar;
use crate::autograd::graph::topological_sort;
use log::debug;

impl Scalar {
    /// Adds `grad_to_add` into this node's gradient.
    ///
    /// Gradients are only ever accumulated: a node consumed by several operations
    /// receives the sum of every downstream contribution.
    pub(crate) fn acc_grad(&self, grad_to_add: f64) {
        self.write_data().grad += grad_to_add;
    }

    /// Resets the gradient of this node to 0.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with 1 and fills the `grad` of every node reachable
    /// through its operands with the partial derivative of this node with respect to
    /// that node's value.
    ///
    /// Nodes are visited in reverse topological order, so each backward rule fires
    /// exactly once and only after all consumers of its node have contributed. Leaves
    /// and constants have no rule and are skipped.
    ///
    /// Gradients of leaves are accumulated, not reset: call [`Scalar::zero_grad`] (or
    /// `Module::zero_grad`) between independent backward passes that share parameters.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} nodes reachable from root (value={})",
            sorted_nodes.len(),
            self.value()
        );

        self.write_data().grad = 1.0;

        for node in sorted_nodes.iter().rev() {
            // Compute all local gradients FIRST, then release the borrow before accumulating.
            let (inputs, input_grads) = {
                let data = node.read_data();
                let inputs: Vec<Scalar> = data.op.inputs().into_iter().cloned().collect();
                if inputs.is_empty() {
                    continue;
                }
                (inputs, data.op.backward(data.grad, data.value))
            };
            for (input, grad) in inputs.iter().zip(input_grads) {
                input.acc_grad(grad);
            }
        }
    }
}
