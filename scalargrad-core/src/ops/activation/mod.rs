// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear functions applied to a neuron's weighted sum. Each one allocates a new
//! node whose backward rule is expressed in terms of its own output where possible
//! (`tanh`, `sigmoid`) or its input (`relu`).

pub mod relu;
pub mod sigmoid;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
