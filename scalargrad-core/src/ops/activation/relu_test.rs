use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_relu_forward() {
    let values = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (&x, &e) in values.iter().zip(expected.iter()) {
        assert_eq!(relu_op(&Scalar::new(x)).value(), e);
    }
}

#[test]
fn test_relu_backward_positive_and_negative() {
    let pos = Scalar::new(3.0);
    let out = pos.relu();
    out.backward();
    assert_abs_diff_eq!(pos.grad(), 1.0);

    let neg = Scalar::new(-3.0);
    let out = neg.relu();
    out.backward();
    assert_abs_diff_eq!(neg.grad(), 0.0);
}

#[test]
fn test_relu_boundary_takes_positive_branch() {
    let zero = Scalar::new(0.0);
    let out = zero.relu();
    assert_eq!(out.value(), 0.0);
    out.backward();
    assert_abs_diff_eq!(zero.grad(), 1.0);
}
