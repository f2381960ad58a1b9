//! Error types for binstat-plot

use thiserror::Error;

/// Errors raised while preparing plot descriptions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// Grid axis name not recognized
    #[error("axis must be one of 'both', 'x', 'y', got '{0}'")]
    UnknownAxis(String),

    /// Colormap name not recognized
    #[error("Unknown colormap '{0}'")]
    UnknownColormap(String),

    /// Label matrix does not match the data matrix
    #[error("Shape of labels don't match shape of x ({labels:?} != {data:?})")]
    LabelShape {
        labels: (usize, usize),
        data: (usize, usize),
    },

    /// Paired sequences differ in length
    #[error("x and y must have the same length ({x} != {y})")]
    LengthMismatch { x: usize, y: usize },

    /// An argument is outside its documented domain
    #[error("Precondition failed: {0}")]
    Precondition(String),
}

/// Result type alias for plot preparation
pub type PlotResult<T> = Result<T, PlotError>;
