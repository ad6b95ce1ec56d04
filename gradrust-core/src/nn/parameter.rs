use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A leaf [`Value`] marked as a learnable parameter of a [`Module`](crate::nn::Module).
///
/// Parameters persist across forward passes: each pass builds a fresh graph
/// that references the same leaf, and the optimizer overwrites its data.
#[derive(Clone)]
pub struct Parameter {
    value: Value,
    name: Option<String>,
}

impl Parameter {
    /// Creates a named parameter holding `data`.
    pub fn new(data: f64, name: Option<String>) -> Self {
        let value = Value::new(data);
        if let Some(name) = &name {
            value.set_label(name);
        }
        Parameter { value, name }
    }

    pub fn new_unnamed(data: f64) -> Self {
        Parameter::new(data, None)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The shared node; cloning it keeps the identity of the parameter.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_inner(self) -> Value {
        self.value
    }
}

impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.value)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
