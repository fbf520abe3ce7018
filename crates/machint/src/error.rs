//! Error types for machint operations

use thiserror::Error;

/// Main error type for machint operations.
///
/// Messages never carry the value of a secret integer; only type names,
/// lengths and public literals appear in them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MachintError {
    /// Division, remainder or modular reduction by zero (or by a
    /// non-positive modulus)
    #[error("Division by zero")]
    DivisionByZero,

    /// Modular inverse requested for a value that shares a factor with
    /// the modulus
    #[error("Value of type {type_name} is not invertible modulo the given modulus")]
    NotInvertible {
        /// Type of the value
        type_name: &'static str,
    },

    /// Literal does not fit the target type or field
    #[error("Literal {literal} is out of range for {type_name}")]
    LiteralOutOfRange {
        /// The rejected literal, as written
        literal: String,
        /// Target type
        type_name: &'static str,
    },

    /// Malformed hexadecimal input
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Quotient does not fit the type (`MIN / -1`)
    #[error("Arithmetic overflow in {type_name}")]
    Overflow {
        /// Type of the operands
        type_name: &'static str,
    },

    /// Byte lengths disagree
    #[error("Length mismatch: expected {expected} bytes, got {got}")]
    LengthMismatch {
        /// Required length
        expected: usize,
        /// Length received
        got: usize,
    },

    /// Type name not known to the dispatcher
    #[error("Unknown integer type: {0}")]
    UnknownType(String),

    /// Operation name not known to the dispatcher
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

/// Result type alias for machint operations
pub type Result<T> = std::result::Result<T, MachintError>;
