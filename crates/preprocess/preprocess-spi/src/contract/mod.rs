//! Preprocessing contracts.

mod scaler;

pub use scaler::Scaler;
