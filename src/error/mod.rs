//! Error handling for the aggregation engine.

use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

/// Specialized error type for the aggregation engine
#[derive(Debug, Error)]
pub enum GradstatError {
    /// The source file does not exist
    #[error("source file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The content could not be decoded under any supported encoding
    #[error("decode error: {0}")]
    Decode(String),

    /// The content could not be parsed as a table
    #[error("schema error: {0}")]
    Schema(String),

    /// A column required by a specific view is absent
    #[error("column '{0}' not found")]
    MissingColumn(String),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying Arrow kernels
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, GradstatError>;
