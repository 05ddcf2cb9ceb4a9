//! Reconstruction scoring result.

use serde::{Deserialize, Serialize};

/// Result of reconstruction-error anomaly scoring.
///
/// Fully aligned 1:1 with the scored series; no edge trimming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructionScore {
    /// Per-point anomaly flags, 0 or 1.
    pub flags: Vec<u8>,
    /// Per-point squared reconstruction errors.
    pub errors: Vec<f64>,
    /// Batch error threshold.
    pub threshold: f64,
}

impl ReconstructionScore {
    /// Count of flagged points.
    pub fn flagged_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f == 1).count()
    }
}
