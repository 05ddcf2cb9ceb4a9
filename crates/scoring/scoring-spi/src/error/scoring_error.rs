//! Scoring error types.

use preprocess_spi::PreprocessError;
use thiserror::Error;

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Errors that can occur while scoring a series.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    /// Malformed or empty input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration value.
    #[error("Invalid config: {name} - {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Array lengths disagree where they must match.
    #[error("Dimension mismatch: left has {left} elements, right has {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Numerical computation failure.
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Failure in the normalization layer.
    #[error("Preprocess error: {0}")]
    Preprocess(#[from] PreprocessError),
}
