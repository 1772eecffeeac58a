use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init;
use crate::nn::parameter::Parameter;
use crate::ops::{add_op, mul_op};
use crate::scalar::Scalar;
use rand::Rng;

/// A single unit: `activation(sum_i w_i * x_i + b)`.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights drawn uniformly from `[0, 1)` and a zero bias.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, rng: &mut R) -> Self {
        Neuron {
            weights: init::uniform(n_inputs, rng),
            bias: init::zero(),
        }
    }

    /// Creates a neuron from explicit weight and bias values (fresh leaves, zero gradients).
    pub fn from_values(weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Parameter::new(w)).collect(),
            bias: Parameter::new(bias),
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Computes `activation(0 + sum_i w_i * x_i + b)` as a new subgraph.
    ///
    /// # Errors
    /// `ArityMismatch` if `inputs.len()` differs from the number of weights; checked
    /// before any node is allocated.
    pub fn forward(&self, inputs: &[Scalar], activation: Activation) -> Result<Scalar, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::ArityMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let mut sum = Scalar::from(0.0);
        for (w, x) in self.weights.iter().zip(inputs) {
            sum = add_op(&sum, &mul_op(w, x));
        }
        let pre_activation = add_op(&sum, &self.bias);
        Ok(activation.apply(&pre_activation))
    }

    /// Weights in order, then the bias.
    pub fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
