//! Scoring Service Provider Interface
//!
//! Defines model traits, result types, and errors for anomaly scoring.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ReconstructionModel, SequenceModel};
pub use error::{Result, ScoringError};
pub use model::{ForecastScore, ReconstructionScore};
