//! Error types for binstat-stats
//!
//! Statistics that are merely undefined for the given data (an empty
//! histogram, exhausted degrees of freedom) are not errors; they come back as
//! `None`. The variants here are caller mistakes.

use thiserror::Error;

/// Errors raised by histogram operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistogramError {
    /// Merge destination is shorter than the source
    #[error("Destination histogram smaller than source histogram ({dst} < {src})")]
    SizeMismatch { dst: usize, src: usize },

    /// An argument is outside its documented domain
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// `counts` must have exactly one element fewer than `bins`
    #[error("Expected {expected} counts for {bins} bin edges, got {counts}")]
    LengthMismatch {
        bins: usize,
        counts: usize,
        expected: usize,
    },

    /// Bin edges must be finite and strictly increasing
    #[error("Bin edges must be finite and strictly increasing (violated at edge {index})")]
    NonIncreasingEdges { index: usize },

    /// Counts must be non-negative numbers
    #[error("Count at bin {index} is negative or NaN")]
    NegativeCount { index: usize },

    /// Expanding to values needs whole-number counts
    #[error("Count at bin {index} is not a whole number")]
    NonIntegralCount { index: usize },
}

impl HistogramError {
    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        HistogramError::Precondition(message.into())
    }
}

/// Result type alias for histogram operations
pub type HistogramResult<T> = Result<T, HistogramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_display() {
        let err = HistogramError::SizeMismatch { dst: 2, src: 5 };
        assert!(err.to_string().contains("2 < 5"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = HistogramError::LengthMismatch {
            bins: 4,
            counts: 2,
            expected: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("Expected 3 counts"));
        assert!(msg.contains("got 2"));
    }

    #[test]
    fn test_precondition_display() {
        let err = HistogramError::precondition("q must be in range [0, 1]");
        assert!(err.to_string().contains("q must be in range"));
    }
}
