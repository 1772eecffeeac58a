// scalargrad-core/src/scalar/tests.rs

use super::*;
use crate::autograd::grad_check::finite_difference;
use crate::error::ScalarGradError;
use approx::assert_abs_diff_eq;

#[test]
fn test_scalar_creation() {
    let s = Scalar::new(2.5);
    assert_eq!(s.value(), 2.5);
    assert_eq!(s.grad(), 0.0);
    assert!(s.is_leaf());
    assert_eq!(s.op_name(), "Leaf");
    assert!(s.operands().is_empty());
}

#[test]
fn test_clone_shares_node() {
    let a = Scalar::new(1.0);
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    b.set_value(5.0);
    assert_eq!(a.value(), 5.0);
    assert!(!a.ptr_eq(&Scalar::new(5.0)));
}

#[test]
fn test_from_values_and_constants() {
    let xs = Scalar::from_values(&[1.0, 0.0, -1.0]);
    assert_eq!(xs.len(), 3);
    assert_eq!(xs[2].value(), -1.0);
    let k: Scalar = 3.0.into();
    assert!(k.is_leaf());
}

#[test]
fn test_operator_overloads() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(5.0);
    assert_eq!((&a + &b).value(), 7.0);
    assert_eq!((&a - &b).value(), -3.0);
    assert_eq!((&a * &b).value(), 10.0);
    assert_eq!((&a * 4.0).value(), 8.0);
    assert_eq!((1.0 - &b).value(), -4.0);
    assert_eq!((a.clone() + b.clone()).value(), 7.0);
    assert_eq!((-a).value(), -2.0);
}

#[test]
fn test_backward_seeds_root_with_one() {
    let a = Scalar::new(3.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_diamond_accumulation() {
    // Critical regression: a and b are each reached through both c and d.
    let a = Scalar::new(2.0);
    let b = Scalar::new(-3.0);
    let c = &a + &b;
    let d = &a * &b;
    let e = &c + &d;
    e.backward();

    // Along c: 1. Along d: the other factor.
    assert_abs_diff_eq!(a.grad(), 1.0 + b.value());
    assert_abs_diff_eq!(b.grad(), 1.0 + a.value());
    // Intermediates receive exactly one contribution each.
    assert_abs_diff_eq!(c.grad(), 1.0);
    assert_abs_diff_eq!(d.grad(), 1.0);

    let f = |x: &[Scalar]| -> Result<Scalar, ScalarGradError> {
        let c = &x[0] + &x[1];
        let d = &x[0] * &x[1];
        Ok(&c + &d)
    };
    let numeric = finite_difference(f, &[a.clone(), b.clone()], 1e-6).unwrap();
    assert_abs_diff_eq!(a.grad(), numeric[0], epsilon = 1e-4);
    assert_abs_diff_eq!(b.grad(), numeric[1], epsilon = 1e-4);
}

#[test]
fn test_deep_diamond_chain() {
    // x -> (x + x) repeated: every level doubles, so d/dx = 2^n.
    let x = Scalar::new(1.0);
    let mut y = x.clone();
    for _ in 0..10 {
        y = &y + &y;
    }
    y.backward();
    assert_eq!(y.value(), 1024.0);
    assert_eq!(x.grad(), 1024.0);
}

#[test]
fn test_repeated_backward_accumulates_into_leaves() {
    let a = Scalar::new(3.0);
    let b = Scalar::new(4.0);
    (&a * &b).backward();
    (&a * &b).backward();
    assert_abs_diff_eq!(a.grad(), 8.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_debug_does_not_walk_graph() {
    let a = Scalar::new(1.0);
    let b = &a * 2.0;
    let rendered = format!("{:?}", b);
    assert!(rendered.contains("value: 2.0"));
    assert!(rendered.contains("Mul[1.0, 2.0]"));
    assert_eq!(format!("{}", b), "2");
}
