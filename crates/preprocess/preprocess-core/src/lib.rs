//! Preprocessing Core
//!
//! Scaler implementations and the sequence windower.

mod scalers;
mod sequences;

pub use scalers::*;
pub use sequences::*;
