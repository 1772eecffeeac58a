use crate::scalar::Scalar;

/// Checks that a node's value and gradient are within `tolerance` of the expected numbers.
/// Panics with both numbers on mismatch.
pub fn check_scalar_near(actual: &Scalar, expected_value: f64, expected_grad: f64, tolerance: f64) {
    let value = actual.value();
    let grad = actual.grad();
    if (value - expected_value).abs() > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            value, expected_value, tolerance
        );
    }
    if (grad - expected_grad).abs() > tolerance {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            grad, expected_grad, tolerance
        );
    }
}

/// Builds `count` fresh leaves with values `start, start + step, ...`.
pub fn leaf_sequence(start: f64, step: f64, count: usize) -> Vec<Scalar> {
    (0..count).map(|i| Scalar::new(start + step * i as f64)).collect()
}
