mod common;

use approx::assert_abs_diff_eq;
use gradrust_core::autograd::grad_check::check_grad;
use gradrust_core::{GradRustError, OpKind, Operand, Value};

const H: f64 = 1e-8;
const TOL: f64 = 1e-6;

fn tanh_affine(x: &[Value]) -> Result<Value, GradRustError> {
    let d = &x[0] * &x[1];
    let e = &d + &x[2];
    Ok(e.tanh())
}

fn tanh_div_sub(x: &[Value]) -> Result<Value, GradRustError> {
    let d = &x[0] / &x[1];
    let e = &d - &x[2];
    Ok(e.tanh())
}

#[test]
fn numerical_gradient_agrees_for_mul_add() {
    common::init_logger();
    let grads = check_grad(tanh_affine, &[-2.0, 1.0, 5.0], H, TOL).expect("gradients agree");
    assert_eq!(grads.len(), 3);
}

#[test]
fn numerical_gradient_agrees_for_div_sub() {
    check_grad(tanh_div_sub, &[2.0, -4.0, 3.0], H, TOL).expect("gradients agree");
}

#[test]
fn numerical_gradient_agrees_for_exp_pow_chain() {
    // f = exp(a) * b^3 / (a - c)
    let f = |x: &[Value]| -> Result<Value, GradRustError> {
        Ok(x[0].exp().mul(x[1].pow(3.0)).div(x[0].sub(&x[2])))
    };
    check_grad(f, &[0.3, 0.8, -1.1], H, 1e-5).expect("gradients agree");
}

#[test]
fn concrete_scenario_through_public_api() {
    let a = Value::new(2.0);
    let b = Value::new(-4.0);
    let c = Value::new(3.0);
    let d = a.mul(&b);
    let e = d.add(&c);
    let l = e.tanh();
    l.backward();

    assert_eq!(l.grad(), 1.0);
    assert_eq!(l.op(), OpKind::Tanh);
    let t = e.data().tanh();
    assert_abs_diff_eq!(e.grad(), 1.0 - t * t, epsilon = TOL);
    assert_abs_diff_eq!(d.grad(), e.grad(), epsilon = TOL);
    assert_abs_diff_eq!(c.grad(), e.grad(), epsilon = TOL);
    assert_abs_diff_eq!(a.grad(), d.grad() * b.data(), epsilon = TOL);
    assert_abs_diff_eq!(b.grad(), d.grad() * a.data(), epsilon = TOL);
}

#[test]
fn shared_leaf_sums_path_contributions() {
    // g = a*b + a*c: dg/da = b + c
    let a = Value::new(1.5);
    let b = Value::new(-2.0);
    let c = Value::new(0.25);
    let g = &(&a * &b) + &(&a * &c);
    g.backward();
    assert_abs_diff_eq!(a.grad(), b.data() + c.data(), epsilon = 1e-12);
}

#[test]
fn textual_operands_are_validated() {
    let a = Value::new(2.0);
    let ok = Operand::try_from("0.5").expect("numeric");
    assert_eq!(a.mul(ok).data(), 1.0);

    let err = Operand::try_from("two").unwrap_err();
    assert_eq!(
        err,
        GradRustError::InvalidOperandKind {
            operand: "\"two\"".to_string()
        }
    );
}
