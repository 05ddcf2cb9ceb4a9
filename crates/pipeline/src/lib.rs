//! # pipeline
//!
//! End-to-end anomaly scoring: loads the persisted scaler and models into
//! an immutable [`ScoringContext`], runs the forecast and reconstruction
//! scorers over a [`SensorSeries`], and fuses their signals into the
//! maintenance-alert column of a [`ScoredSeries`].

mod artifacts;
mod context;
mod error;
mod series;
mod train;

pub use artifacts::{ArtifactBundle, ScalerParams};
pub use context::ScoringContext;
pub use error::{PipelineError, Result};
pub use series::{ScoredSeries, SensorSeries};
pub use train::{train, TrainingOptions};
