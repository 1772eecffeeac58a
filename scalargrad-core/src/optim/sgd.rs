use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use log::{debug, warn};

/// Plain gradient descent: `value -= lr * grad` for every parameter.
///
/// No momentum, weight decay or learning-rate schedule.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` over shallow clones of `params`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `lr` is not a finite positive number.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Result<Self, ScalarGradError> {
        if !(lr.is_finite() && lr > 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "learning rate must be a finite positive number, got {}",
                lr
            )));
        }
        Ok(SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        debug!("SgdOptimizer: step over {} params (lr={})", self.params.len(), self.lr);
        let mut non_finite = 0usize;
        for param in &self.params {
            let grad = param.grad();
            if !grad.is_finite() {
                non_finite += 1;
            }
            param.set_value(param.value() - self.lr * grad);
        }
        if non_finite > 0 {
            warn!("SgdOptimizer: {} parameters received a non-finite gradient", non_finite);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn lr(&self) -> f64 {
        self.lr
    }
}
