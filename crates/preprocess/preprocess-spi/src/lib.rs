//! Preprocessing Service Provider Interface
//!
//! Defines the scaler contract and error types for normalization.

pub mod contract;
pub mod error;

// Re-export all public items at crate root for convenience
pub use contract::Scaler;
pub use error::{PreprocessError, Result};
