use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::parameter::Parameter;
use crate::scalar::Scalar;

/// The base trait for all neural network modules (layers, networks).
///
/// A module maps an input vector of graph nodes to an output vector, allocating a
/// fresh subgraph on every call, and exposes its learnable parameters.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: The input vector. Its length must match the module's input arity.
    /// * `activation`: The non-linearity applied by every neuron.
    ///
    /// # Errors
    /// Returns `ScalarGradError::ArityMismatch` if `inputs` has the wrong length. No
    /// graph node is allocated in that case.
    fn forward(&self, inputs: &[Scalar], activation: Activation) -> Result<Vec<Scalar>, ScalarGradError>;

    /// Returns all learnable parameters of the module, including those of sub-modules,
    /// in a stable order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
