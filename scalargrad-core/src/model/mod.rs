//! Multilayer perceptron and its persisted form.

pub mod mlp;
pub mod state;

pub use mlp::{Mlp, DEFAULT_LAYER_SIZES};
pub use state::{LayerState, MlpState, NeuronState, DEFAULT_MODEL_PATH};
