use thiserror::Error;

/// Custom error type for the gradrust engine and the network structures built on it.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum GradRustError {
    /// An operand could not be interpreted as a node or as a numeric value.
    #[error("Invalid operand kind: expected a Value or a number, got {operand}")]
    InvalidOperandKind { operand: String },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} requires at least one input")]
    EmptyInput { operation: String },

    #[error("Invalid parameter initialisation: {reason}")]
    InvalidInitialization { reason: String },
}
