//! # Scalar Operations Module (`ops`)
//!
//! Every graph operation is a pure constructor: it reads the values of its operands,
//! allocates a brand-new [`Scalar`](crate::Scalar) holding the result, and records
//! the operands plus the matching [`Op`](crate::autograd::Op) variant so the backward
//! pass can apply the local derivative rule later. Operands are never mutated here.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub (compound), mul, neg (compound), pow.
//! - [`activation`]: tanh, relu, sigmoid.

pub mod activation;
pub mod arithmetic;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, mul_op, neg_op, pow_op, sub_op};
