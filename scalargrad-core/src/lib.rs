//! Scalar reverse-mode automatic differentiation and a small multilayer perceptron
//! trained on top of it.
//!
//! Every [`Scalar`] is a node of a dynamically built computation graph. Calling
//! [`Scalar::backward`] on an output fills the gradient of every node it depends on.

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod scalar;
pub mod scalar_data;
pub mod train;
pub mod utils;

pub use error::ScalarGradError;
pub use model::Mlp;
pub use nn::{Activation, Module};
pub use scalar::Scalar;
pub use train::{TrainConfig, TrainReport, Trainer};
