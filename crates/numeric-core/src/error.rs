//! Error types for generic numeric aggregates
//!
//! Capability violations never reach this type: they are rejected when the
//! call site compiles. These errors belong to the opt-in checked APIs, which
//! report conditions the default APIs answer with the additive identity.

use thiserror::Error;

/// Core error type for checked aggregate operations
#[derive(Error, Debug)]
pub enum Error {
    /// The operation has no meaningful value for an empty sequence
    #[error("Empty input: {operation} requires at least one element")]
    EmptyInput { operation: &'static str },

    /// Fewer elements than the operation needs
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create an error for a sequence shorter than `expected`
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }
}
