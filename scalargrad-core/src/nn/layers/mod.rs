// src/nn/layers/mod.rs
// Fully connected building blocks: a single Neuron and a Layer of them.

pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use neuron::Neuron;
