//! Training phase: fit scaler and models, produce the artifact bundle.

use crate::artifacts::{ArtifactBundle, ScalerParams};
use crate::error::{PipelineError, Result};
use crate::series::SensorSeries;
use preprocess::{make_sequences, MinMaxScaler, Scaler, ScalerKind, StandardScaler};
use scoring::{ArForecaster, DenseAutoencoder, TrainConfig};

/// Training-phase options.
#[derive(Debug, Clone, Copy)]
pub struct TrainingOptions {
    pub scaler_kind: ScalerKind,
    pub time_steps: usize,
    pub train_config: TrainConfig,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            scaler_kind: ScalerKind::MinMax,
            time_steps: 10,
            train_config: TrainConfig::default(),
        }
    }
}

/// Fit the scaler, forecaster, and autoencoder on a reference series.
///
/// The reference series must be longer than `time_steps`; unlike scoring,
/// training cannot proceed without at least one window.
pub fn train(series: &SensorSeries, options: TrainingOptions) -> Result<ArtifactBundle> {
    let (scaler, params): (Box<dyn Scaler>, ScalerParams) = match options.scaler_kind {
        ScalerKind::MinMax => {
            let mut scaler = MinMaxScaler::new();
            scaler.fit(&series.values)?;
            let params = ScalerParams::MinMax {
                min: scaler.min(),
                max: scaler.max(),
            };
            (Box::new(scaler), params)
        }
        ScalerKind::Standard => {
            let mut scaler = StandardScaler::new();
            scaler.fit(&series.values)?;
            let params = ScalerParams::Standard {
                mean: scaler.mean(),
                std_dev: scaler.std_dev(),
            };
            (Box::new(scaler), params)
        }
    };

    let normalized = scaler.transform(&series.values)?;

    let (windows, targets) = make_sequences(&normalized, options.time_steps)?;
    if windows.is_empty() {
        return Err(PipelineError::InvalidInput(format!(
            "training series of length {} produces no windows for time_steps {}",
            series.len(),
            options.time_steps
        )));
    }

    let forecaster = ArForecaster::fit(&windows, &targets)?;
    let reconstructor = DenseAutoencoder::fit(&normalized, options.train_config)?;

    Ok(ArtifactBundle {
        scaler: params,
        forecaster,
        reconstructor,
    })
}
