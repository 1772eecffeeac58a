// src/scalar_data.rs
use crate::autograd::Op;
use std::rc::Rc;

/// Internal storage for a single node of the computation graph.
///
/// Wrapped in `Rc<RefCell<ScalarData>>` by [`Scalar`](crate::Scalar) so that a
/// node can be shared by every operation that consumes it while its gradient is
/// still mutable during the backward pass.
#[derive(Debug)]
pub struct ScalarData {
    /// The forward-computed value.
    pub(crate) value: f64,
    /// Accumulated derivative of the backward root with respect to `value`.
    /// Starts at 0 and only ever grows by addition during a backward pass.
    pub(crate) grad: f64,
    /// The operation that produced this node. Leaves and constants hold `Op::Leaf`.
    pub(crate) op: Op,
}

impl ScalarData {
    /// Creates a leaf node (no operands, no backward rule).
    pub fn new(value: f64) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            op: Op::Leaf,
        }
    }

    /// Creates an interior node produced by `op`.
    pub(crate) fn from_op(value: f64, op: Op) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            op,
        }
    }
}

impl Drop for ScalarData {
    // Tears the subgraph down with an explicit stack. Without this, dropping the last
    // handle of a long chain recurses once per node.
    fn drop(&mut self) {
        if matches!(self.op, Op::Leaf) {
            return;
        }
        let mut pending = std::mem::replace(&mut self.op, Op::Leaf).into_operands();
        while let Some(node) = pending.pop() {
            // Only detach nodes this handle keeps alive; shared ones outlive it.
            if Rc::strong_count(&node.data) == 1 {
                if let Ok(mut data) = node.data.try_borrow_mut() {
                    pending.extend(std::mem::replace(&mut data.op, Op::Leaf).into_operands());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "scalar_data_test.rs"]
mod tests;
