// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::scalar::Scalar;

/// Multiplies two nodes: `a * b`.
///
/// Backward: `da += b * g`, `db += a * g`.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.value() * b.value(), Op::Mul(a.clone(), b.clone()))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
