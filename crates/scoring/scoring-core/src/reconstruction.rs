//! Reconstruction-error anomaly scoring.

use crate::percentile::percentile;
use scoring_api::ReconstructionConfig;
use scoring_spi::{ReconstructionModel, ReconstructionScore, Result, ScoringError};

/// Scores a normalized series with a trained reconstruction model.
///
/// Every point is encoded and decoded independently; the squared
/// difference between point and reconstruction is its error. The batch's
/// 99.85th-percentile error becomes the anomaly threshold and a point is
/// flagged when its error strictly exceeds it. Output is aligned 1:1 with
/// the input, no edge trimming.
///
/// The threshold is recomputed per batch, so flags are only comparable
/// within one batch.
pub struct ReconstructionScorer<'a> {
    model: &'a dyn ReconstructionModel,
    config: ReconstructionConfig,
}

impl<'a> ReconstructionScorer<'a> {
    pub fn new(model: &'a dyn ReconstructionModel) -> Self {
        Self::with_config(model, ReconstructionConfig::default())
    }

    pub fn with_config(model: &'a dyn ReconstructionModel, config: ReconstructionConfig) -> Self {
        Self { model, config }
    }

    pub fn score(&self, normalized: &[f64]) -> Result<ReconstructionScore> {
        if normalized.is_empty() {
            return Err(ScoringError::InvalidInput(
                "cannot score an empty series".to_string(),
            ));
        }

        let errors: Vec<f64> = normalized
            .iter()
            .map(|&x| {
                let reconstructed = self.model.reconstruct(x)?;
                Ok((x - reconstructed).powi(2))
            })
            .collect::<Result<_>>()?;

        let threshold = percentile(&errors, self.config.anomaly_percentile)?;
        let flags = errors.iter().map(|&e| u8::from(e > threshold)).collect();

        Ok(ReconstructionScore {
            flags,
            errors,
            threshold,
        })
    }
}
