use crate::error::ScalarGradError;

/// Trait defining the common interface for optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the update rule to every managed parameter using the gradient left
    /// on it by the most recent backward pass.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Called before each forward/backward pass; without it gradients from successive
    /// iterations would be summed.
    fn zero_grad(&mut self);

    /// Current learning rate.
    fn lr(&self) -> f64;
}
