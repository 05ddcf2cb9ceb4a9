//! Reconstruction model trait.

use crate::error::Result;

/// Trained reconstruction model encoding and decoding a single point.
///
/// Each point is reconstructed independently; there is no windowing. The
/// squared difference between a point and its reconstruction is the
/// reconstruction error used for thresholding.
pub trait ReconstructionModel: Send + Sync {
    /// Encode and decode one normalized value.
    fn reconstruct(&self, value: f64) -> Result<f64>;
}
