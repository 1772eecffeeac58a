// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, mul_op};
use crate::scalar::Scalar;

/// Subtracts two nodes, built as the compound `a + (b * -1)`.
///
/// There is no dedicated backward rule: the gradient flows through the `Add` and
/// `Mul` nodes of the composition, so `da += g` and `db -= g`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    add_op(a, &mul_op(b, &Scalar::from(-1.0)))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
