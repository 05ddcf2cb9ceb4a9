//! Scaler trait definition.

use crate::error::Result;

/// Normalization scaler trait.
///
/// Implementations learn transform parameters once (`fit`) and then apply
/// them statelessly in both directions. A scaler restored from persisted
/// parameters is already fitted; `transform` and `inverse_transform` never
/// mutate state or re-fit.
///
/// Invariant: `inverse_transform(transform(x)) ≈ x` within floating
/// tolerance for any finite input with distinct values.
pub trait Scaler: Send + Sync {
    /// Learn transform parameters from reference data.
    ///
    /// Non-finite values are ignored. Fails with
    /// [`PreprocessError::InvalidInput`](crate::PreprocessError::InvalidInput)
    /// if the input is empty or contains no finite value.
    fn fit(&mut self, values: &[f64]) -> Result<()>;

    /// Apply the learned forward transform.
    fn transform(&self, values: &[f64]) -> Result<Vec<f64>>;

    /// Undo the forward transform.
    fn inverse_transform(&self, values: &[f64]) -> Result<Vec<f64>>;

    /// Check whether parameters have been learned or loaded.
    fn is_fitted(&self) -> bool;
}
