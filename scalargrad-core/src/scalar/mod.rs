// src/scalar/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::Op;
use crate::scalar_data::ScalarData;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

mod accessors;
mod autograd_methods;
mod traits;

/// A node of the dynamically built computation graph holding a single `f64`.
///
/// `Scalar` uses `Rc<RefCell<ScalarData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be an operand of several consumers; every
///     clone of a `Scalar` points to the same node (cheap clones).
/// 2.  **Interior Mutability:** the gradient (and, for parameters, the value) can be
///     updated through a shared handle during the backward pass and the optimizer step.
///
/// The graph is single-threaded by construction; `Scalar` is neither `Send` nor `Sync`.
#[derive(Clone)]
pub struct Scalar {
    pub(crate) data: Rc<RefCell<ScalarData>>,
}

impl Scalar {
    /// Creates a leaf node holding `value` with a zero gradient.
    pub fn new(value: f64) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::new(value))),
        }
    }

    /// Wraps every number of `values` as a separate leaf node.
    pub fn from_values(values: &[f64]) -> Vec<Scalar> {
        values.iter().map(|&v| Scalar::new(v)).collect()
    }

    /// Creates the output node of an operation.
    pub(crate) fn from_op(value: f64, op: Op) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::from_op(value, op))),
        }
    }

    /// Immutable access to the node's internal data.
    pub(crate) fn read_data(&self) -> Ref<'_, ScalarData> {
        self.data.borrow()
    }

    /// Mutable access to the node's internal data.
    pub(crate) fn write_data(&self) -> RefMut<'_, ScalarData> {
        self.data.borrow_mut()
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same graph node.
    pub fn ptr_eq(&self, other: &Scalar) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl From<f64> for Scalar {
    /// Wraps a raw constant as a leaf with no backward rule.
    fn from(value: f64) -> Self {
        Scalar::new(value)
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        f.debug_struct("Scalar")
            .field("value", &data.value)
            .field("grad", &data.grad)
            .field("op", &data.op)
            .finish()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests;
