use crate::operand::Operand;
use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::rc::Rc;

impl Value {
    /// Creates a leaf node with zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Creates a labelled leaf node.
    pub fn with_label(data: f64, label: &str) -> Self {
        let value = Value::new(data);
        value.set_label(label);
        value
    }

    /// Resolves an operand into a node. Scalars become fresh leaves.
    pub fn from_operand(operand: impl Into<Operand>) -> Self {
        operand.into().into_value()
    }

    pub(crate) fn from_data(data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(data)),
        }
    }
}

/// Wraps each number in a fresh leaf.
pub fn values(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

/// Wraps each row of numbers in fresh leaves, e.g. a dataset of input vectors.
pub fn value_matrix(rows: &[Vec<f64>]) -> Vec<Vec<Value>> {
    rows.iter().map(|row| values(row)).collect()
}
