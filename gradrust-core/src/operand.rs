//! Right-hand operands of the binary operations.
//!
//! An operation accepts either an existing node or a plain number; numbers
//! are coerced into a fresh zero-gradient leaf at the call site.

use crate::error::GradRustError;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Either an existing node or a numeric literal.
#[derive(Debug, Clone)]
pub enum Operand {
    Value(Value),
    Scalar(f64),
}

impl Operand {
    /// Validates a numeric-like operand.
    ///
    /// # Errors
    /// `InvalidOperandKind` if the number has no `f64` representation.
    pub fn from_number<N: ToPrimitive + Debug>(number: N) -> Result<Self, GradRustError> {
        number
            .to_f64()
            .map(Operand::Scalar)
            .ok_or_else(|| GradRustError::InvalidOperandKind {
                operand: format!("{:?}", number),
            })
    }

    /// Resolves the operand into a node, creating a leaf for scalars.
    pub fn into_value(self) -> Value {
        match self {
            Operand::Value(value) => value,
            Operand::Scalar(x) => Value::new(x),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Value(value.clone())
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<f32> for Operand {
    fn from(x: f32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

impl TryFrom<&str> for Operand {
    type Error = GradRustError;

    /// Parses a textual number.
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.trim()
            .parse::<f64>()
            .map(Operand::Scalar)
            .map_err(|_| GradRustError::InvalidOperandKind {
                operand: format!("{:?}", text),
            })
    }
}
