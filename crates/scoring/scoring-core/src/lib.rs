//! Scoring Core
//!
//! Scorer implementations, trainable models, and signal fusion.

mod forecast;
mod fuser;
mod models;
mod percentile;
mod reconstruction;

pub use forecast::*;
pub use fuser::*;
pub use models::*;
pub use percentile::*;
pub use reconstruction::*;
