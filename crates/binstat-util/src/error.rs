//! Error types for binstat-util

use thiserror::Error;

/// Errors raised by the array helpers
#[derive(Error, Debug)]
pub enum UtilError {
    /// An argument is outside its documented domain
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Scale name not recognized
    #[error("Unknown scale '{0}', expected one of: linear, log, logit")]
    UnknownScale(String),

    /// Operation needs at least one value
    #[error("Input contains no usable values")]
    EmptyInput,

    /// Lookup key absent and no default given
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Sequence cannot be laid out on a Hilbert curve
    #[error("Sequence has length {len} which is not compatible with a Hilbert curve (must be 4^level, level 1..={max_level})")]
    HilbertLength { len: usize, max_level: u32 },

    /// Subnet string could not be parsed
    #[error("Invalid subnet '{input}': {reason}")]
    InvalidSubnet { input: String, reason: String },

    /// Rounding to a multiple of zero
    #[error("Multiple must be non-zero")]
    ZeroMultiple,

    /// Array shape error
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl UtilError {
    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        UtilError::Precondition(message.into())
    }

    pub(crate) fn invalid_subnet(input: &str, reason: impl Into<String>) -> Self {
        UtilError::InvalidSubnet {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for utility operations
pub type UtilResult<T> = Result<T, UtilError>;
