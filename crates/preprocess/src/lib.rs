//! # preprocess
//!
//! Normalization and sequence windowing for sensorwatch.
//! Scalers are fit once on reference data and reused read-only at scoring
//! time; windowing turns normalized series into sequence-model input.

pub use preprocess_facade::*;
