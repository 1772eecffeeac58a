//! Plain-data snapshot of an [`Mlp`] and its JSON form.
//!
//! The JSON layout is `{"nInputs": n, "layers": [{"neurons": [{"W": [..], "b": x}]}]}`.
//! Gradients are never persisted; a restored network starts with every gradient at 0.

use super::mlp::Mlp;
use crate::error::ScalarGradError;
use crate::nn::layers::{Layer, Neuron};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name used by the demo binary when no path is given.
pub const DEFAULT_MODEL_PATH: &str = "model.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronState {
    #[serde(rename = "W")]
    pub weights: Vec<f64>,
    #[serde(rename = "b")]
    pub bias: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerState {
    pub neurons: Vec<NeuronState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlpState {
    #[serde(rename = "nInputs")]
    pub n_inputs: usize,
    pub layers: Vec<LayerState>,
}

fn malformed(msg: String) -> ScalarGradError {
    ScalarGradError::MalformedPersistedState(msg)
}

impl Mlp {
    /// Captures the current weights and biases.
    pub fn to_state(&self) -> MlpState {
        MlpState {
            n_inputs: self.n_inputs(),
            layers: self
                .layers()
                .iter()
                .map(|layer| LayerState {
                    neurons: layer
                        .neurons()
                        .iter()
                        .map(|n| NeuronState {
                            weights: n.weights().iter().map(|w| w.value()).collect(),
                            bias: n.bias().value(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Rebuilds a network from a snapshot. Every parameter is a fresh leaf.
    ///
    /// # Errors
    /// `MalformedPersistedState` if the snapshot has no layers, an empty layer, or a
    /// neuron whose weight count does not match the width of the layer below it.
    pub fn from_state(state: &MlpState) -> Result<Mlp, ScalarGradError> {
        if state.n_inputs == 0 {
            return Err(malformed("nInputs must be positive".to_string()));
        }
        if state.layers.is_empty() {
            return Err(malformed("network has no layers".to_string()));
        }

        let mut layers = Vec::with_capacity(state.layers.len());
        let mut fan_in = state.n_inputs;
        for (li, layer_state) in state.layers.iter().enumerate() {
            if layer_state.neurons.is_empty() {
                return Err(malformed(format!("layer {} has no neurons", li)));
            }
            let mut neurons = Vec::with_capacity(layer_state.neurons.len());
            for (ni, neuron_state) in layer_state.neurons.iter().enumerate() {
                if neuron_state.weights.len() != fan_in {
                    return Err(malformed(format!(
                        "layer {} neuron {}: expected {} weights, found {}",
                        li,
                        ni,
                        fan_in,
                        neuron_state.weights.len()
                    )));
                }
                neurons.push(Neuron::from_values(&neuron_state.weights, neuron_state.bias));
            }
            let layer = Layer::from_neurons(fan_in, neurons).map_err(|e| malformed(e.to_string()))?;
            fan_in = layer.n_outputs();
            layers.push(layer);
        }

        Mlp::from_layers(state.n_inputs, layers).map_err(|e| malformed(e.to_string()))
    }

    /// Serializes the network to a JSON string.
    pub fn to_json(&self) -> Result<String, ScalarGradError> {
        Ok(serde_json::to_string(&self.to_state())?)
    }

    /// Parses a network from a JSON string produced by [`Mlp::to_json`].
    pub fn from_json(json: &str) -> Result<Mlp, ScalarGradError> {
        let state: MlpState = serde_json::from_str(json)?;
        Mlp::from_state(&state)
    }

    /// Writes the JSON form of the network to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScalarGradError> {
        let json = serde_json::to_string_pretty(&self.to_state())?;
        fs::write(path.as_ref(), json)?;
        info!("Saved model to {}", path.as_ref().display());
        Ok(())
    }

    /// Reads a network previously written by [`Mlp::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Mlp, ScalarGradError> {
        let json = fs::read_to_string(path.as_ref())?;
        let mlp = Mlp::from_json(&json)?;
        debug!(
            "Loaded model from {} (layers {:?})",
            path.as_ref().display(),
            mlp.layer_sizes()
        );
        Ok(mlp)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
