use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use approx::abs_diff_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Gradient check input must be a leaf node (no operands). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Output of `func` after nudging `input` to `value`; the original value is restored.
fn evaluate_at<F>(func: &F, inputs: &[Scalar], input: &Scalar, value: f64) -> Result<f64, ScalarGradError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    let original = input.value();
    input.set_value(value);
    let output = func(inputs);
    input.set_value(original);
    Ok(output?.value())
}

/// Central finite-difference estimate of d func / d input_i for every input.
///
/// `func` must rebuild its graph from the current input values on every call. Each
/// input is perturbed by `+epsilon` and `-epsilon` in place and restored afterwards;
/// gradients are never touched.
pub fn finite_difference<F>(func: F, inputs: &[Scalar], epsilon: f64) -> Result<Vec<f64>, ScalarGradError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    let mut grads = Vec::with_capacity(inputs.len());
    for input in inputs {
        let x = input.value();
        let plus = evaluate_at(&func, inputs, input, x + epsilon)?;
        let minus = evaluate_at(&func, inputs, input, x - epsilon)?;
        grads.push((plus - minus) / (2.0 * epsilon));
    }
    Ok(grads)
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Runs `func` once, back-propagates from its output, and compares the gradient left
/// on every input with a central difference of step `epsilon`. Passes when every pair
/// is within `tolerance` (absolute). On success the inputs hold the analytical gradients.
pub fn check_grad<F>(func: F, inputs: &[Scalar], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    // --- 1. Analytical gradients ---
    let output = func(inputs)?;
    output.backward();
    let analytical: Vec<f64> = inputs.iter().map(|s| s.grad()).collect();

    // --- 2. Numerical gradients ---
    for (i, (input, &analytical_grad)) in inputs.iter().zip(analytical.iter()).enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let x = input.value();
        let loss_plus = evaluate_at(&func, inputs, input, x + epsilon)?;
        let loss_minus = evaluate_at(&func, inputs, input, x - epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "check_grad: input {} analytical={} numerical={}",
            i, analytical_grad, numerical_grad
        );
        if !abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
