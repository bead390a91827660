//! Error types for vector operations

use thiserror::Error;

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors raised while turning text into a vector.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Input text was empty
    #[error("input is empty")]
    Empty,

    /// Wrong number of separated fields
    #[error("expected {expected} components, found {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// A field could not be converted to the component type
    #[error("component {index} is not a valid number: {text:?}")]
    InvalidComponent { index: usize, text: String },
}

/// Errors that can occur during vector operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VectorError {
    /// Component index outside `0..arity`
    #[error("index {index} out of range for vector of arity {arity}")]
    IndexOutOfRange { index: usize, arity: usize },

    /// Text could not be parsed into a vector
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Parse was called without an input string
    #[error("input text is absent")]
    NullInput,

    /// Slice length does not match the vector arity
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Unknown number format specifier
    #[error("invalid number format specifier: {0:?}")]
    InvalidNumberFormat(String),

    /// Distribution parameters rejected by a random generator
    #[error("invalid distribution parameters: {0}")]
    InvalidDistribution(String),
}

impl VectorError {
    /// True for every variant a text parser can produce from bad (non-absent) input.
    pub fn is_format_error(&self) -> bool {
        matches!(self, VectorError::Format(_))
    }

    pub fn is_index_error(&self) -> bool {
        matches!(self, VectorError::IndexOutOfRange { .. })
    }
}
