use super::config::TrainConfig;
use crate::error::ScalarGradError;
use crate::model::Mlp;
use crate::nn::losses::{MSELoss, Reduction};
use crate::nn::module::Module;
use crate::optim::{Optimizer, SgdOptimizer};
use crate::scalar::Scalar;
use log::{debug, info, warn};

/// Loss history of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Summed squared error of every epoch, measured before that epoch's update.
    pub losses: Vec<f64>,
    /// Loss of the last epoch.
    pub final_loss: f64,
}

/// Drives full-batch gradient descent on an [`Mlp`].
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Self {
        Trainer { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Trains `model` in place on `inputs` / `targets`.
    ///
    /// Each epoch zeroes every gradient, forwards every example through a fresh graph,
    /// sums `(prediction - target)^2` over the batch, backpropagates that sum and lets
    /// [`SgdOptimizer`] apply `value -= learning_rate * grad`.
    ///
    /// Everything is validated before the first parameter is touched.
    ///
    /// # Errors
    /// * `InvalidConfiguration` for an invalid config, an empty batch, or
    ///   `inputs.len() != targets.len()`.
    /// * `ArityMismatch` if an input vector does not match the network input size, or the
    ///   network has more than one output.
    pub fn fit(&self, model: &Mlp, inputs: &[Vec<f64>], targets: &[f64]) -> Result<TrainReport, ScalarGradError> {
        self.config.validate()?;
        if inputs.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "training set is empty".to_string(),
            ));
        }
        if inputs.len() != targets.len() {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "got {} input vectors but {} targets",
                inputs.len(),
                targets.len()
            )));
        }
        if model.n_outputs() != 1 {
            return Err(ScalarGradError::ArityMismatch {
                expected: 1,
                actual: model.n_outputs(),
                operation: "Trainer::fit (network outputs)".to_string(),
            });
        }
        if let Some(bad) = inputs.iter().find(|x| x.len() != model.n_inputs()) {
            return Err(ScalarGradError::ArityMismatch {
                expected: model.n_inputs(),
                actual: bad.len(),
                operation: "Trainer::fit (input vector)".to_string(),
            });
        }

        let TrainConfig { learning_rate, epochs, activation, .. } = self.config;
        let loss_fn = MSELoss::new(Reduction::Sum);
        let mut optimizer = SgdOptimizer::new(model.parameters().into_iter().cloned(), learning_rate)?;

        debug!(
            "Trainer: {} examples, {} epochs, lr={}, activation={}",
            inputs.len(),
            epochs,
            learning_rate,
            activation
        );

        let mut losses = Vec::with_capacity(epochs);
        for epoch in 0..epochs {
            optimizer.zero_grad();

            let mut predictions = Vec::with_capacity(inputs.len());
            for x in inputs {
                let outputs = model.forward(&Scalar::from_values(x), activation)?;
                let first = outputs.into_iter().next().ok_or_else(|| {
                    ScalarGradError::ArityMismatch {
                        expected: 1,
                        actual: 0,
                        operation: "Trainer::fit (network outputs)".to_string(),
                    }
                })?;
                predictions.push(first);
            }

            let loss = loss_fn.calculate(&predictions, targets)?;
            loss.backward();

            let loss_value = loss.value();
            if !loss_value.is_finite() {
                warn!("Epoch {}: loss is not finite ({})", epoch, loss_value);
            }
            if self.config.should_log(epoch) {
                info!("Epoch {}: loss = {:.6}", epoch, loss_value);
            }
            losses.push(loss_value);

            optimizer.step()?;
        }

        let final_loss = losses.last().copied().unwrap_or(f64::NAN);
        info!("Training finished after {} epochs: loss = {:.6}", epochs, final_loss);
        Ok(TrainReport { losses, final_loss })
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
