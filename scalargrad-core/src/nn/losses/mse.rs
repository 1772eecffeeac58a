// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::ops::{add_op, mul_op, pow_op, sub_op};
use crate::scalar::Scalar;
use std::str::FromStr;

/// Specifies the reduction to apply to the per-example squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfiguration(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between predicted nodes and plain numeric targets.
///
/// Each term is `(prediction - target)^2`, built with `sub_op` and `pow_op(_, 2)`;
/// the terms are folded left to right with `add_op`. `Reduction::Mean` additionally
/// multiplies by `1 / n`. Training uses `Reduction::Sum`.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    /// Creates a new `MSELoss` with the given reduction.
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node for `predictions` against `targets`.
    ///
    /// # Errors
    /// * `ArityMismatch` if the two slices differ in length.
    /// * `InvalidConfiguration` if they are empty.
    pub fn calculate(&self, predictions: &[Scalar], targets: &[f64]) -> Result<Scalar, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::ArityMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }

        let squared_error = |(prediction, &target): (&Scalar, &f64)| {
            pow_op(&sub_op(prediction, &Scalar::from(target)), 2.0)
        };
        let mut terms = predictions.iter().zip(targets).map(squared_error);
        let first = terms.next().ok_or_else(|| {
            ScalarGradError::InvalidConfiguration("cannot compute a loss over an empty batch".to_string())
        })?;
        let total = terms.fold(first, |acc, term| add_op(&acc, &term));

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => mul_op(&total, &Scalar::from(1.0 / predictions.len() as f64)),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
