//! Scoring result types.

mod forecast_score;
mod reconstruction_score;

pub use forecast_score::ForecastScore;
pub use reconstruction_score::ReconstructionScore;
