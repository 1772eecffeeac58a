use super::*;
use crate::utils::testing::check_scalar_near;
use approx::assert_abs_diff_eq;

#[test]
fn test_add_forward() {
    let a = Scalar::new(1.5);
    let b = Scalar::new(-4.0);
    let c = add_op(&a, &b);
    assert_eq!(c.value(), -2.5);
    assert_eq!(c.op_name(), "Add");
    assert_eq!(c.operands().len(), 2);
    // Forward construction never touches operand values or gradients.
    assert_eq!(a.value(), 1.5);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_add_backward_passes_gradient_through() {
    for &(x, y) in &[(0.0, 0.0), (3.0, -7.0), (1e6, 2.5e-3)] {
        let a = Scalar::new(x);
        let b = Scalar::new(y);
        let c = add_op(&a, &b);
        c.backward();
        assert_abs_diff_eq!(c.grad(), 1.0);
        check_scalar_near(&a, x, 1.0, 0.0);
        check_scalar_near(&b, y, 1.0, 0.0);
    }
}

#[test]
fn test_add_same_operand_accumulates() {
    let a = Scalar::new(2.0);
    let doubled = add_op(&a, &a);
    doubled.backward();
    assert_eq!(doubled.value(), 4.0);
    assert_abs_diff_eq!(a.grad(), 2.0);
}
