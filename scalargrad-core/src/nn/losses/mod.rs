// Loss functions producing a single scalar root for the backward pass.

pub mod mse;

pub use mse::{MSELoss, Reduction};
