// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::scalar::Scalar;

/// Raises a node to a constant power: `base ^ exponent`.
///
/// The exponent is a plain number and is not part of the graph.
/// Backward: `dbase += exponent * base^(exponent - 1) * g`.
///
/// Non-finite results (e.g. a negative base with a fractional exponent) are not
/// rejected; they propagate through later operations and gradients as NaN.
pub fn pow_op(base: &Scalar, exponent: f64) -> Scalar {
    Scalar::from_op(base.value().powf(exponent), Op::Pow(base.clone(), exponent))
}

impl Scalar {
    /// Raises this node to a constant power. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Scalar {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
