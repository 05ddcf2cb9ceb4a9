//! # evaluation
//!
//! Binary classification metrics for validating scorer quality against
//! ground-truth labels.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while computing metrics.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Label arrays differ in length or contain values outside {0, 1}.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Precision, recall, and F1 for one scorer run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Evaluation {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Evaluate binary predictions against ground-truth labels.
///
/// Standard binary definitions: precision = TP/(TP+FP),
/// recall = TP/(TP+FN), F1 = harmonic mean of the two. A zero denominator
/// yields 0.0 for the affected metric. Strictly binary; there is no
/// averaging mode.
pub fn evaluate(y_true: &[u8], y_pred: &[u8]) -> Result<Evaluation> {
    if y_true.len() != y_pred.len() {
        return Err(EvalError::InvalidInput(format!(
            "label arrays differ in length: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.iter().chain(y_pred.iter()).any(|&v| v > 1) {
        return Err(EvalError::InvalidInput(
            "labels must be 0 or 1".to_string(),
        ));
    }

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;
    for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
        match (truth, pred) {
            (1, 1) => tp += 1,
            (0, 1) => fp += 1,
            (1, 0) => fn_ += 1,
            _ => {}
        }
    }

    let precision = if tp + fp == 0 {
        0.0
    } else {
        tp as f64 / (tp + fp) as f64
    };
    let recall = if tp + fn_ == 0 {
        0.0
    } else {
        tp as f64 / (tp + fn_) as f64
    };
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    Ok(Evaluation {
        precision,
        recall,
        f1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_example() {
        let result = evaluate(&[0, 1, 1, 0], &[0, 1, 0, 0]).unwrap();
        assert!((result.precision - 1.0).abs() < 1e-10);
        assert!((result.recall - 0.5).abs() < 1e-10);
        assert!((result.f1 - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_perfect_predictions() {
        let labels = [0, 1, 0, 1, 1, 0];
        let result = evaluate(&labels, &labels).unwrap();
        assert!((result.precision - 1.0).abs() < 1e-10);
        assert!((result.recall - 1.0).abs() < 1e-10);
        assert!((result.f1 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_positive_predictions() {
        let result = evaluate(&[1, 1, 0], &[0, 0, 0]).unwrap();
        assert_eq!(result.precision, 0.0);
        assert_eq!(result.recall, 0.0);
        assert_eq!(result.f1, 0.0);
    }

    #[test]
    fn test_no_positive_truth() {
        let result = evaluate(&[0, 0, 0], &[1, 0, 1]).unwrap();
        assert_eq!(result.precision, 0.0);
        assert_eq!(result.recall, 0.0);
        assert_eq!(result.f1, 0.0);
    }

    #[test]
    fn test_all_false_positives() {
        let result = evaluate(&[0, 0, 1], &[1, 1, 1]).unwrap();
        assert!((result.precision - 1.0 / 3.0).abs() < 1e-10);
        assert!((result.recall - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_mismatch() {
        let err = evaluate(&[0, 1], &[0, 1, 1]).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn test_non_binary_labels() {
        let err = evaluate(&[0, 2], &[0, 1]).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_inputs() {
        let result = evaluate(&[], &[]).unwrap();
        assert_eq!(result.precision, 0.0);
        assert_eq!(result.recall, 0.0);
        assert_eq!(result.f1, 0.0);
    }
}
