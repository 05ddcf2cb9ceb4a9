//! Immutable scoring context and the pipeline runner.

use crate::artifacts::ArtifactBundle;
use crate::error::Result;
use crate::series::{ScoredSeries, SensorSeries};
use preprocess::Scaler;
use scoring::{
    fuse_alerts, ArForecaster, DenseAutoencoder, ForecastConfig, ForecastScorer,
    ReconstructionConfig, ReconstructionScorer, SequenceModel,
};
use std::path::Path;

/// Everything scoring needs, loaded once and immutable thereafter.
///
/// Maps the original system's process-global model/scaler loading to an
/// explicit initialization step. The context never mutates after
/// construction, so one instance can be shared by concurrent read-only
/// callers; the pipeline itself provides no locking or cancellation.
pub struct ScoringContext {
    scaler: Box<dyn Scaler>,
    forecaster: ArForecaster,
    reconstructor: DenseAutoencoder,
    forecast_config: ForecastConfig,
    reconstruction_config: ReconstructionConfig,
}

impl std::fmt::Debug for ScoringContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringContext").finish_non_exhaustive()
    }
}

impl ScoringContext {
    /// Build a context from a loaded artifact bundle with default
    /// thresholds.
    pub fn from_bundle(bundle: ArtifactBundle) -> Self {
        Self {
            scaler: bundle.scaler.into_scaler(),
            forecaster: bundle.forecaster,
            reconstructor: bundle.reconstructor,
            forecast_config: ForecastConfig::default(),
            reconstruction_config: ReconstructionConfig::default(),
        }
    }

    /// Load all persisted artifacts from `dir` into a ready context.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Ok(Self::from_bundle(ArtifactBundle::load(dir)?))
    }

    /// Override the forecast threshold percentile.
    pub fn with_forecast_config(mut self, config: ForecastConfig) -> Self {
        self.forecast_config = config;
        self
    }

    /// Override the reconstruction threshold percentile.
    pub fn with_reconstruction_config(mut self, config: ReconstructionConfig) -> Self {
        self.reconstruction_config = config;
        self
    }

    /// Window length the loaded forecaster was trained with.
    pub fn time_steps(&self) -> usize {
        self.forecaster.time_steps()
    }

    /// Score one complete in-memory series start to finish.
    ///
    /// Normalizes with the training-time scaler (never re-fit here), runs
    /// both scorers, fuses their flags, and returns the input table
    /// augmented with the four output columns, index-aligned throughout.
    pub fn score_series(&self, series: &SensorSeries) -> Result<ScoredSeries> {
        let normalized = self.scaler.transform(&series.values)?;

        let forecast = ForecastScorer::with_config(
            &self.forecaster,
            &*self.scaler,
            self.forecast_config,
        )
        .score(&normalized)?;

        let reconstruction =
            ReconstructionScorer::with_config(&self.reconstructor, self.reconstruction_config)
                .score(&normalized)?;

        let maintenance_alert = fuse_alerts(&forecast.flags, &reconstruction.flags)?;

        Ok(ScoredSeries {
            timestamps: series.timestamps.clone(),
            values: series.values.clone(),
            value_normalized: normalized,
            predicted_failure: forecast.flags,
            autoencoder_anomaly: reconstruction.flags,
            maintenance_alert,
        })
    }
}
