//! Persisted artifact bundle.
//!
//! The fitted scaler, both model parameter sets, and the training-time
//! `time_steps` are coupled: scoring with a mismatched subset silently
//! produces garbage. The bundle therefore loads and saves them together,
//! all-or-nothing.

use crate::error::{PipelineError, Result};
use preprocess::{MinMaxScaler, Scaler, StandardScaler};
use scoring::{ArForecaster, DenseAutoencoder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SCALER_FILE: &str = "scaler.json";
const FORECASTER_FILE: &str = "forecaster.json";
const RECONSTRUCTOR_FILE: &str = "reconstructor.json";

/// Serialized scaler parameters, tagged by strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerParams {
    MinMax { min: f64, max: f64 },
    Standard { mean: f64, std_dev: f64 },
}

impl ScalerParams {
    /// Rehydrate a fitted, read-only scaler.
    pub fn into_scaler(&self) -> Box<dyn Scaler> {
        match *self {
            ScalerParams::MinMax { min, max } => Box::new(MinMaxScaler::from_params(min, max)),
            ScalerParams::Standard { mean, std_dev } => {
                Box::new(StandardScaler::from_params(mean, std_dev))
            }
        }
    }
}

/// The complete set of persisted training outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub scaler: ScalerParams,
    pub forecaster: ArForecaster,
    pub reconstructor: DenseAutoencoder,
}

impl ArtifactBundle {
    /// Window length the forecaster was trained with.
    pub fn time_steps(&self) -> usize {
        use scoring::SequenceModel;
        self.forecaster.time_steps()
    }

    /// Write all artifacts into `dir`, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|e| PipelineError::ArtifactLoad(format!("{}: {}", dir.display(), e)))?;

        write_json(&dir.join(SCALER_FILE), &self.scaler)?;
        write_json(&dir.join(FORECASTER_FILE), &self.forecaster)?;
        write_json(&dir.join(RECONSTRUCTOR_FILE), &self.reconstructor)?;
        Ok(())
    }

    /// Load all artifacts from `dir`.
    ///
    /// Any missing or corrupt file fails the whole load with
    /// [`PipelineError::ArtifactLoad`]; partial bundles are never usable.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let scaler: ScalerParams = read_json(&dir.join(SCALER_FILE))?;
        let forecaster: ArForecaster = read_json(&dir.join(FORECASTER_FILE))?;
        let reconstructor: DenseAutoencoder = read_json(&dir.join(RECONSTRUCTOR_FILE))?;

        let bundle = Self {
            scaler,
            forecaster,
            reconstructor,
        };
        if bundle.time_steps() == 0 {
            return Err(PipelineError::ArtifactLoad(format!(
                "{}: forecaster has zero-length weights",
                dir.join(FORECASTER_FILE).display()
            )));
        }
        Ok(bundle)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| PipelineError::ArtifactLoad(format!("{}: {}", path.display(), e)))?;
    fs::write(path, json)
        .map_err(|e| PipelineError::ArtifactLoad(format!("{}: {}", path.display(), e)))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PipelineError::ArtifactLoad(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| PipelineError::ArtifactLoad(format!("{}: {}", path.display(), e)))
}
