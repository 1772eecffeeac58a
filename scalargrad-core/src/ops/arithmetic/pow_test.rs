use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_pow_square() {
    let a = Scalar::new(3.0);
    let p = pow_op(&a, 2.0);
    assert_abs_diff_eq!(p.value(), 9.0);
    p.backward();
    assert_abs_diff_eq!(a.grad(), 6.0);
}

#[test]
fn test_pow_fractional_and_negative_exponents() {
    let a = Scalar::new(4.0);
    let root = a.pow(0.5);
    assert_abs_diff_eq!(root.value(), 2.0);
    root.backward();
    assert_abs_diff_eq!(a.grad(), 0.25, epsilon = 1e-12);

    let b = Scalar::new(2.0);
    let inv = b.pow(-1.0);
    assert_abs_diff_eq!(inv.value(), 0.5);
    inv.backward();
    assert_abs_diff_eq!(b.grad(), -0.25, epsilon = 1e-12);
}

#[test]
fn test_pow_exponent_is_not_an_operand() {
    let a = Scalar::new(1.5);
    let p = a.pow(3.0);
    assert_eq!(p.operands().len(), 1);
    assert_eq!(p.op_name(), "Pow");
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() {
    let a = Scalar::new(-8.0);
    let p = a.pow(1.0 / 3.0);
    assert!(p.value().is_nan());
    p.backward();
    assert!(a.grad().is_nan());
}
