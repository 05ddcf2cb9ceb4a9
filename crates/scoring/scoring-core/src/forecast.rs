//! Forecast-based failure scoring.

use crate::percentile::percentile;
use preprocess_core::make_sequences;
use preprocess_spi::Scaler;
use scoring_api::ForecastConfig;
use scoring_spi::{ForecastScore, Result, SequenceModel};

/// Scores a normalized series with a trained sequence forecaster.
///
/// Windows of the model's `time_steps` are forecast one step ahead, the
/// predictions are rescaled back to original units, and the batch's
/// 95th-percentile rescaled prediction becomes the failure threshold. A
/// point is flagged when its *normalized* value exceeds that threshold.
/// The threshold is computed in rescaled-prediction space but applied in
/// normalized space; this asymmetry is deliberate and matches the observed
/// behavior downstream consumers depend on.
///
/// Thresholds are recomputed per batch, so flags are only comparable
/// within one batch.
pub struct ForecastScorer<'a> {
    model: &'a dyn SequenceModel,
    scaler: &'a dyn Scaler,
    config: ForecastConfig,
}

impl<'a> ForecastScorer<'a> {
    pub fn new(model: &'a dyn SequenceModel, scaler: &'a dyn Scaler) -> Self {
        Self::with_config(model, scaler, ForecastConfig::default())
    }

    pub fn with_config(
        model: &'a dyn SequenceModel,
        scaler: &'a dyn Scaler,
        config: ForecastConfig,
    ) -> Self {
        Self {
            model,
            scaler,
            config,
        }
    }

    /// Score a normalized series.
    ///
    /// Output flags are index-aligned to `normalized`: the first
    /// `time_steps` points carry flag 0 because no window exists for them.
    /// A series too short to produce any window yields all-zero flags and
    /// no threshold rather than an error.
    pub fn score(&self, normalized: &[f64]) -> Result<ForecastScore> {
        let time_steps = self.model.time_steps();
        let (windows, _targets) = make_sequences(normalized, time_steps)?;

        if windows.is_empty() {
            return Ok(ForecastScore {
                flags: vec![0; normalized.len()],
                predictions: Vec::new(),
                threshold: None,
            });
        }

        let raw: Vec<f64> = windows
            .iter()
            .map(|window| self.model.predict(window))
            .collect::<Result<_>>()?;
        let rescaled = self.scaler.inverse_transform(&raw)?;

        let threshold = percentile(&rescaled, self.config.failure_percentile)?;

        let flags = normalized
            .iter()
            .enumerate()
            .map(|(i, &value)| u8::from(i >= time_steps && value > threshold))
            .collect();

        Ok(ForecastScore {
            flags,
            predictions: rescaled,
            threshold: Some(threshold),
        })
    }
}
