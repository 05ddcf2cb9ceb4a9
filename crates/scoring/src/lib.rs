//! # scoring
//!
//! Anomaly scoring for sensorwatch: a forecast scorer and a reconstruction
//! scorer each turn model output into a binary per-point signal via
//! percentile thresholds, and `fuse_alerts` combines them into one
//! maintenance alert.

pub use scoring_facade::*;
