use crate::scalar::Scalar;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf `Scalar` marking it as a learnable parameter of a Module.
///
/// Cloning a `Parameter` is shallow: both handles refer to the same graph leaf, so an
/// optimizer holding a clone updates the value the module reads on its next forward.
#[derive(Clone)]
pub struct Parameter(Scalar);

impl Parameter {
    /// Creates a new parameter leaf holding `value` with a zero gradient.
    pub fn new(value: f64) -> Self {
        Parameter(Scalar::new(value))
    }

    /// Consumes the Parameter and returns the underlying leaf.
    pub fn into_inner(self) -> Scalar {
        self.0
    }
}

// Allow accessing the underlying Scalar immutably via Deref.
impl Deref for Parameter {
    type Target = Scalar;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter(value={}, grad={})", self.0.value(), self.0.grad())
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
