//! Preprocessing error types.

mod preprocess_error;

pub use preprocess_error::{PreprocessError, Result};
