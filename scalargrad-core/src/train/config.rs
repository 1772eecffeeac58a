use crate::error::ScalarGradError;
use crate::nn::activation::Activation;

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_EPOCHS: usize = 100;
/// Progress is logged this many times over a run unless `log_every` overrides it.
pub const LOG_INTERVALS: usize = 10;

/// Hyperparameters of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    pub activation: Activation,
    /// Log the loss every `n` epochs. `None` means at every tenth of the run.
    pub log_every: Option<usize>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            activation: Activation::default(),
            log_every: None,
        }
    }
}

impl TrainConfig {
    pub fn builder() -> TrainConfigBuilder {
        TrainConfigBuilder::default()
    }

    /// # Errors
    /// `InvalidConfiguration` for a non-finite or non-positive learning rate, zero epochs,
    /// or `log_every == Some(0)`.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "learning rate must be a finite positive number, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "epochs must be at least 1".to_string(),
            ));
        }
        if self.log_every == Some(0) {
            return Err(ScalarGradError::InvalidConfiguration(
                "log_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether progress is logged after `epoch` (0-based).
    ///
    /// With `log_every == Some(n)` every `n`-th epoch is logged. Otherwise every tenth of
    /// the run is, counted exactly (15 epochs log at 0, 3, 6, 9, 12), and runs shorter than
    /// ten epochs log every epoch.
    pub fn should_log(&self, epoch: usize) -> bool {
        match self.log_every {
            Some(n) => epoch % n.max(1) == 0,
            None if self.epochs < LOG_INTERVALS => true,
            None => (epoch as u128 * LOG_INTERVALS as u128) % self.epochs as u128 == 0,
        }
    }
}

/// Builder for [`TrainConfig`]; unset fields keep their defaults.
#[derive(Debug, Default, Clone)]
pub struct TrainConfigBuilder {
    learning_rate: Option<f64>,
    epochs: Option<usize>,
    activation: Option<String>,
    log_every: Option<usize>,
}

impl TrainConfigBuilder {
    #[must_use]
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = Some(learning_rate);
        self
    }

    #[must_use]
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = Some(epochs);
        self
    }

    /// Activation by name; parsed in [`TrainConfigBuilder::build`].
    #[must_use]
    pub fn activation(mut self, name: &str) -> Self {
        self.activation = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn log_every(mut self, epochs: usize) -> Self {
        self.log_every = Some(epochs);
        self
    }

    /// # Errors
    /// `InvalidActivation` for an unknown activation name, otherwise whatever
    /// [`TrainConfig::validate`] reports.
    pub fn build(self) -> Result<TrainConfig, ScalarGradError> {
        let default = TrainConfig::default();
        let activation = match self.activation {
            Some(name) => name.parse()?,
            None => default.activation,
        };
        let config = TrainConfig {
            learning_rate: self.learning_rate.unwrap_or(default.learning_rate),
            epochs: self.epochs.unwrap_or(default.epochs),
            activation,
            log_every: self.log_every.or(default.log_every),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
