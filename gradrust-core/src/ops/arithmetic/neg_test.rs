use super::*;
use crate::ops::OpKind;

#[test]
fn test_neg_is_mul_by_minus_one() {
    let a = Value::new(2.5);
    let n = neg_op(&a);
    assert_eq!(n.data(), -2.5);
    assert_eq!(n.op(), OpKind::Mul);
    assert_eq!(n.inputs()[1].data(), -1.0);
    n.backward();
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn test_double_negation() {
    let a = Value::new(-7.0);
    let n = neg_op(&neg_op(&a));
    assert_eq!(n.data(), -7.0);
    n.backward();
    assert_eq!(a.grad(), 1.0);
}
