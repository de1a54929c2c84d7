//! Error types for the render boundary.
//!
//! The render kernels themselves never fail: off-grid points, collapsed
//! bounding boxes and out-of-range frames are dropped silently. Errors are
//! only raised when a caller hands over malformed buffers or settings.

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Primary error type for render operations.
#[derive(Debug, Error)]
pub enum RenderError {
    // === Shape Errors ===
    #[error("ROI must have 4 elements [xmin, xmax, ymin, ymax], got {0}")]
    InvalidRoi(usize),

    #[error("point table must have at least one column")]
    NoColumns,

    #[error("point table of {len} values is not a multiple of {cols} columns")]
    RaggedTable { len: usize, cols: usize },

    #[error("{operation} needs at least {required} point columns, got {found}")]
    InsufficientColumns {
        operation: &'static str,
        required: usize,
        found: usize,
    },

    #[error("buffer of {len} values does not match shape {shape:?}")]
    ShapeMismatch { len: usize, shape: Vec<usize> },

    // === Value Errors ===
    #[error("sigma accuracy must be positive and finite, got {0}")]
    InvalidSigmaAccuracy(f64),

    #[error("invalid point at row {row}: {message}")]
    InvalidPoint { row: usize, message: String },

    // === Infrastructure Errors ===
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl RenderError {
    /// Short stable code for this error, suitable for a host environment's
    /// error identifiers.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderError::InvalidRoi(_) => "InvalidRoi",
            RenderError::NoColumns | RenderError::RaggedTable { .. } => "InvalidPointTable",
            RenderError::InsufficientColumns { .. } => "InsufficientColumns",
            RenderError::ShapeMismatch { .. } => "ShapeMismatch",
            RenderError::InvalidSigmaAccuracy(_) => "InvalidSigmaAccuracy",
            RenderError::InvalidPoint { .. } => "InvalidPoint",
            RenderError::ThreadPool(_) => "ThreadPool",
            RenderError::Config(_) => "Config",
        }
    }

    /// Whether this error reports a shape or size precondition violation.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            RenderError::InvalidRoi(_)
                | RenderError::NoColumns
                | RenderError::RaggedTable { .. }
                | RenderError::InsufficientColumns { .. }
                | RenderError::ShapeMismatch { .. }
        )
    }
}
