// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::scalar::Scalar;

/// Adds two nodes: `a + b`.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.value() + b.value(), Op::Add(a.clone(), b.clone()))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
