//! Sequence-forecasting model trait.

use crate::error::Result;

/// Trained sequence model predicting the next value of a window.
///
/// Implementations are loaded read-only from persisted parameters and never
/// mutate during scoring, so a model can be shared by concurrent callers.
pub trait SequenceModel: Send + Sync {
    /// Predict the value immediately following `window`.
    ///
    /// `window` must have exactly [`time_steps`](Self::time_steps) elements.
    fn predict(&self, window: &[f64]) -> Result<f64>;

    /// Window length this model was trained with.
    fn time_steps(&self) -> usize;
}
