//! Reverse-mode automatic differentiation over scalar graphs.
//!
//! - [`backward_op`]: the [`Op`] variant stored on every node and its local derivative rules.
//! - [`graph`]: topological ordering of the graph reachable from a root.
//! - [`grad_check`]: central finite-difference verification of analytic gradients.
//!
//! The backward pass itself is [`Scalar::backward`](crate::Scalar::backward).

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::Op;
