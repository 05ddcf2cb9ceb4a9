//! Preprocessing Facade
//!
//! Unified re-exports for the preprocessing module:
//! - `Scaler` trait and errors from SPI
//! - `ScalerKind` and `SequenceConfig` from API
//! - Scaler implementations and `make_sequences` from Core

// Re-export everything from SPI
pub use preprocess_spi::*;

// Re-export everything from API
pub use preprocess_api::*;

// Re-export everything from Core
pub use preprocess_core::*;
