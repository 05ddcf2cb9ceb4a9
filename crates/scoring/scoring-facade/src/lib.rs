//! Scoring Facade
//!
//! Unified re-exports for the anomaly scoring module:
//! - Model traits, result types, and errors from SPI
//! - Scorer configuration from API
//! - Scorers, models, fusion, and percentile from Core

// Re-export everything from SPI
pub use scoring_spi::*;

// Re-export everything from API
pub use scoring_api::*;

// Re-export everything from Core
pub use scoring_core::*;
