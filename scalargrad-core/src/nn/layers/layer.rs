use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::scalar::Scalar;
use rand::Rng;

/// An ordered collection of neurons reading the same input vector.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    /// Creates a layer of `n_outputs` independently initialized neurons, each reading `n_inputs` values.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, n_outputs: usize, rng: &mut R) -> Self {
        Layer {
            neurons: (0..n_outputs).map(|_| Neuron::new(n_inputs, rng)).collect(),
            n_inputs,
        }
    }

    /// Builds a layer from existing neurons, which must all share `n_inputs`.
    pub fn from_neurons(n_inputs: usize, neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        if let Some(bad) = neurons.iter().find(|n| n.n_inputs() != n_inputs) {
            return Err(ScalarGradError::ArityMismatch {
                expected: n_inputs,
                actual: bad.n_inputs(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons, n_inputs })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    /// Number of neurons, i.e. the length of this layer's output vector.
    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Scalar], activation: Activation) -> Result<Vec<Scalar>, ScalarGradError> {
        if inputs.len() != self.n_inputs {
            return Err(ScalarGradError::ArityMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs, activation))
            .collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
