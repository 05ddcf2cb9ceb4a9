//! Pipeline error types.

use preprocess::PreprocessError;
use scoring::ScoringError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors surfaced by the scoring pipeline.
///
/// Component errors propagate to the immediate caller unchanged; there is
/// no retry or silent recovery anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed series input (bad CSV, unsorted timestamps, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or corrupt persisted scaler or model.
    #[error("Artifact load failed: {0}")]
    ArtifactLoad(String),

    /// Failure in the normalization or windowing layer.
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    /// Failure in a scorer or the alert fuser.
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// Failure computing validation metrics.
    #[error(transparent)]
    Evaluation(#[from] evaluation::EvalError),
}
