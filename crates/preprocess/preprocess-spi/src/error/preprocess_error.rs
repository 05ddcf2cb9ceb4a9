//! Preprocessing error types.

use thiserror::Error;

/// Result type for preprocessing operations.
pub type Result<T> = std::result::Result<T, PreprocessError>;

/// Errors that can occur while normalizing or windowing data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PreprocessError {
    /// Malformed, empty, or NaN-only input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration value.
    #[error("Invalid config: {name} - {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Scaler used before fitting or loading parameters.
    #[error("Scaler not fitted: call fit() or load persisted parameters first")]
    NotFitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = PreprocessError::InvalidInput("input is empty".to_string());
        assert_eq!(error.to_string(), "Invalid input: input is empty");
    }

    #[test]
    fn test_invalid_config_display() {
        let error = PreprocessError::InvalidConfig {
            name: "time_steps".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid config: time_steps - must be positive"
        );
    }

    #[test]
    fn test_not_fitted_display() {
        let error = PreprocessError::NotFitted;
        assert_eq!(
            error.to_string(),
            "Scaler not fitted: call fit() or load persisted parameters first"
        );
    }

    #[test]
    fn test_result_error_propagation() {
        fn inner() -> Result<()> {
            Err(PreprocessError::NotFitted)
        }

        fn outer() -> Result<i32> {
            inner()?;
            Ok(1)
        }

        assert_eq!(outer().unwrap_err(), PreprocessError::NotFitted);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PreprocessError>();
    }
}
