use crate::autograd::Op;
use crate::scalar::Scalar;

/// Applies the Rectified Linear Unit (ReLU) activation function.
/// ReLU(x) = x if x >= 0 else 0.
///
/// The boundary at exactly 0 takes the positive branch in both passes, so the
/// backward rule is `da += g` for `a >= 0` and nothing otherwise.
pub fn relu_op(a: &Scalar) -> Scalar {
    let x = a.value();
    let value = if x >= 0.0 { x } else { 0.0 };
    Scalar::from_op(value, Op::Relu(a.clone()))
}

impl Scalar {
    /// Applies ReLU to this node. See [`relu_op`].
    pub fn relu(&self) -> Scalar {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
