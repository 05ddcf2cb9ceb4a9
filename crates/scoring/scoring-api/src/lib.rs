//! Scoring API
//!
//! Configuration types for the forecast and reconstruction scorers.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use scoring_spi::{
    ForecastScore, ReconstructionModel, ReconstructionScore, Result, ScoringError, SequenceModel,
};

// ============================================================================
// Scorer Configuration
// ============================================================================

/// Forecast scorer configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Percentile of the rescaled prediction batch used as the failure
    /// threshold (default: 95.0).
    pub failure_percentile: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            failure_percentile: 95.0,
        }
    }
}

impl ForecastConfig {
    pub fn new(failure_percentile: f64) -> Self {
        Self { failure_percentile }
    }
}

/// Reconstruction scorer configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReconstructionConfig {
    /// Percentile of the batch error distribution used as the anomaly
    /// threshold (default: 99.85).
    pub anomaly_percentile: f64,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            anomaly_percentile: 99.85,
        }
    }
}

impl ReconstructionConfig {
    pub fn new(anomaly_percentile: f64) -> Self {
        Self { anomaly_percentile }
    }
}

/// Autoencoder training configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Full-batch gradient descent epochs.
    pub epochs: usize,
    /// Gradient descent step size.
    pub learning_rate: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 200,
            learning_rate: 0.05,
        }
    }
}
