use crate::autograd::Op;
use crate::scalar::Scalar;

/// Hyperbolic tangent. Backward: `da += (1 - out^2) * g`.
pub fn tanh_op(a: &Scalar) -> Scalar {
    Scalar::from_op(a.value().tanh(), Op::Tanh(a.clone()))
}

impl Scalar {
    /// Applies `tanh` to this node. See [`tanh_op`].
    pub fn tanh(&self) -> Scalar {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
