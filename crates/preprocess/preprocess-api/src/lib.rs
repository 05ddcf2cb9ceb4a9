//! Preprocessing API
//!
//! Configuration types for normalization and sequence windowing.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use preprocess_spi::{PreprocessError, Result, Scaler};

// ============================================================================
// Scaler Configuration
// ============================================================================

/// Normalization strategy, selected by configuration rather than by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalerKind {
    /// Map values into the [0, 1] range.
    MinMax,
    /// Map values to zero mean and unit variance (z-score).
    Standard,
}

impl Default for ScalerKind {
    fn default() -> Self {
        Self::MinMax
    }
}

impl ScalerKind {
    /// Parse a strategy name as it appears in configuration files and CLI
    /// flags. Unknown names are a configuration error.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "minmax" | "min-max" | "min_max" => Ok(Self::MinMax),
            "standard" | "zscore" | "z-score" => Ok(Self::Standard),
            other => Err(PreprocessError::InvalidConfig {
                name: "scaler".to_string(),
                reason: format!("unknown strategy '{}'", other),
            }),
        }
    }
}

/// Sequence windowing configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Window length fed to the sequence model.
    pub time_steps: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self { time_steps: 10 }
    }
}

impl SequenceConfig {
    pub fn new(time_steps: usize) -> Self {
        Self { time_steps }
    }
}
