use crate::operand::Operand;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::ops::math_elem::exp_op;
use crate::value::Value;

// Method forms of the `_op` functions, so expressions chain:
// `x.mul(&w).add(&b).tanh()`.
#[allow(clippy::should_implement_trait)]
impl Value {
    pub fn add(&self, other: impl Into<Operand>) -> Value {
        add_op(self, other)
    }

    pub fn mul(&self, other: impl Into<Operand>) -> Value {
        mul_op(self, other)
    }

    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    pub fn neg(&self) -> Value {
        neg_op(self)
    }

    pub fn sub(&self, other: impl Into<Operand>) -> Value {
        sub_op(self, other)
    }

    pub fn div(&self, other: impl Into<Operand>) -> Value {
        div_op(self, other)
    }
}
