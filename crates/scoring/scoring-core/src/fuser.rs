//! Alert fusion.

use scoring_spi::{Result, ScoringError};

/// Combine the two model signals into one maintenance alert.
///
/// Elementwise logical OR over two equal-length binary arrays; pure and
/// commutative. Fails with
/// [`ScoringError::DimensionMismatch`] when the lengths differ.
pub fn fuse_alerts(predicted_failure: &[u8], autoencoder_anomaly: &[u8]) -> Result<Vec<u8>> {
    if predicted_failure.len() != autoencoder_anomaly.len() {
        return Err(ScoringError::DimensionMismatch {
            left: predicted_failure.len(),
            right: autoencoder_anomaly.len(),
        });
    }

    Ok(predicted_failure
        .iter()
        .zip(autoencoder_anomaly.iter())
        .map(|(&a, &b)| u8::from(a == 1 || b == 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuse_is_elementwise_or() {
        let fused = fuse_alerts(&[1, 0, 0, 1], &[0, 0, 1, 1]).unwrap();
        assert_eq!(fused, vec![1, 0, 1, 1]);
    }

    #[test]
    fn test_fuse_is_commutative() {
        let a = [1, 0, 1, 0, 0, 1];
        let b = [0, 0, 1, 1, 0, 1];
        assert_eq!(fuse_alerts(&a, &b).unwrap(), fuse_alerts(&b, &a).unwrap());
    }

    #[test]
    fn test_fuse_all_zeros() {
        assert_eq!(fuse_alerts(&[0, 0, 0], &[0, 0, 0]).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_fuse_empty_arrays() {
        assert!(fuse_alerts(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_fuse_length_mismatch() {
        let err = fuse_alerts(&[1, 0], &[1, 0, 0]).unwrap_err();
        assert_eq!(err, ScoringError::DimensionMismatch { left: 2, right: 3 });
    }
}
