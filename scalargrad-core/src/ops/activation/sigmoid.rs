use crate::autograd::Op;
use crate::scalar::Scalar;

/// Logistic sigmoid `1 / (1 + e^-a)`. Backward: `da += out * (1 - out) * g`.
pub fn sigmoid_op(a: &Scalar) -> Scalar {
    let value = 1.0 / (1.0 + (-a.value()).exp());
    Scalar::from_op(value, Op::Sigmoid(a.clone()))
}

impl Scalar {
    /// Applies the logistic sigmoid to this node. See [`sigmoid_op`].
    pub fn sigmoid(&self) -> Scalar {
        sigmoid_op(self)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
