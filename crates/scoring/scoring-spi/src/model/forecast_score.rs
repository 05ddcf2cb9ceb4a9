//! Forecast scoring result.

use serde::{Deserialize, Serialize};

/// Result of forecast-based failure scoring.
///
/// `flags` is index-aligned to the scored series: the first `time_steps`
/// points carry flag 0 because no window exists for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastScore {
    /// Per-point failure flags, 0 or 1.
    pub flags: Vec<u8>,
    /// Rescaled next-step predictions, one per window.
    pub predictions: Vec<f64>,
    /// Batch threshold; `None` when the batch produced zero windows.
    pub threshold: Option<f64>,
}

impl ForecastScore {
    /// Count of flagged points.
    pub fn flagged_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f == 1).count()
    }

    /// Indices of flagged points.
    pub fn flagged_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| if f == 1 { Some(i) } else { None })
            .collect()
    }
}
