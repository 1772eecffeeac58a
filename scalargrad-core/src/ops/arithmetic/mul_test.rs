use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_mul_forward_and_backward() {
    let a = Scalar::new(3.0);
    let b = Scalar::new(4.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.value(), 12.0);

    c.backward();
    assert_abs_diff_eq!(a.grad(), 4.0);
    assert_abs_diff_eq!(b.grad(), 3.0);
}

#[test]
fn test_mul_square_via_same_operand() {
    // d(a*a)/da = 2a
    let a = Scalar::new(-1.5);
    let sq = mul_op(&a, &a);
    sq.backward();
    assert_abs_diff_eq!(sq.value(), 2.25);
    assert_abs_diff_eq!(a.grad(), -3.0);
}

#[test]
fn test_mul_by_constant_leaves_constant_as_leaf() {
    let a = Scalar::new(2.0);
    let k = Scalar::from(0.5);
    let c = mul_op(&a, &k);
    c.backward();
    assert!(k.is_leaf());
    assert_abs_diff_eq!(a.grad(), 0.5);
    assert_abs_diff_eq!(k.grad(), 2.0);
}
