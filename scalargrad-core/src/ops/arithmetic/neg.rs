use crate::ops::arithmetic::mul_op;
use crate::scalar::Scalar;

/// Negates a node, built as `a * (-1)`.
pub fn neg_op(a: &Scalar) -> Scalar {
    mul_op(a, &Scalar::from(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
