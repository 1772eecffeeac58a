use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::scalar::Scalar;
use crate::train::{TrainConfig, TrainReport, Trainer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Layer sizes used when a caller has no particular architecture in mind.
pub const DEFAULT_LAYER_SIZES: [usize; 2] = [4, 1];

/// A multilayer perceptron: an ordered chain of fully connected layers.
///
/// Layer 0 reads `n_inputs` values; layer `i > 0` reads the outputs of layer `i - 1`.
/// The same activation is applied by every neuron of every layer.
#[derive(Debug)]
pub struct Mlp {
    n_inputs: usize,
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network reading `n_inputs` values with one layer per entry of `layer_sizes`.
    ///
    /// Weights are drawn uniformly from `[0, 1)` using `rng`; biases start at 0.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `n_inputs` is 0, `layer_sizes` is empty, or any size is 0.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, layer_sizes: &[usize], rng: &mut R) -> Result<Self, ScalarGradError> {
        if n_inputs == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "network input size must be positive".to_string(),
            ));
        }
        if layer_sizes.is_empty() || layer_sizes.contains(&0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "layer sizes must be a non-empty list of positive integers, got {:?}",
                layer_sizes
            )));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for &size in layer_sizes {
            layers.push(Layer::new(fan_in, size, rng));
            fan_in = size;
        }
        Ok(Mlp { n_inputs, layers })
    }

    /// Same as [`Mlp::new`] with a `StdRng` seeded from `seed`.
    pub fn with_seed(n_inputs: usize, layer_sizes: &[usize], seed: u64) -> Result<Self, ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(n_inputs, layer_sizes, &mut rng)
    }

    /// Assembles a network from already built layers whose arities must chain.
    pub(crate) fn from_layers(n_inputs: usize, layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        let mut fan_in = n_inputs;
        for (i, layer) in layers.iter().enumerate() {
            if layer.n_inputs() != fan_in {
                return Err(ScalarGradError::ArityMismatch {
                    expected: fan_in,
                    actual: layer.n_inputs(),
                    operation: format!("Mlp::from_layers (layer {})", i),
                });
            }
            fan_in = layer.n_outputs();
        }
        Ok(Mlp { n_inputs, layers })
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of neurons per layer, in order.
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::n_outputs).collect()
    }

    /// Length of the output vector (size of the last layer).
    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }

    /// Runs a forward pass on plain numbers, selecting the activation by name.
    ///
    /// The name is parsed before any node is built, so an unknown activation leaves the
    /// network untouched.
    ///
    /// # Errors
    /// `InvalidActivation` for an unknown name, `ArityMismatch` for a wrong input length.
    pub fn predict(&self, inputs: &[f64], activation: &str) -> Result<Vec<Scalar>, ScalarGradError> {
        let activation: Activation = activation.parse()?;
        self.forward(&Scalar::from_values(inputs), activation)
    }

    /// Trains the network in place with full-batch gradient descent.
    ///
    /// Equivalent to building a [`TrainConfig`] from the arguments and calling
    /// [`Trainer::fit`].
    pub fn train(
        &self,
        inputs: &[Vec<f64>],
        targets: &[f64],
        learning_rate: f64,
        epochs: usize,
        activation: &str,
    ) -> Result<TrainReport, ScalarGradError> {
        let config = TrainConfig::builder()
            .learning_rate(learning_rate)
            .epochs(epochs)
            .activation(activation)
            .build()?;
        Trainer::new(config).fit(self, inputs, targets)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Scalar], activation: Activation) -> Result<Vec<Scalar>, ScalarGradError> {
        if inputs.len() != self.n_inputs {
            return Err(ScalarGradError::ArityMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
                operation: "Mlp::forward".to_string(),
            });
        }
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current, activation)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
