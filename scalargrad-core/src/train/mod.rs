//! Full-batch gradient-descent training for [`Mlp`](crate::model::Mlp).

pub mod config;
pub mod trainer;

pub use config::{TrainConfig, TrainConfigBuilder, DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE};
pub use trainer::{TrainReport, Trainer};
