//! Sequence windowing for sequence-model input.

use preprocess_spi::{PreprocessError, Result};

/// Slice a series into overlapping fixed-length windows with aligned
/// next-step targets.
///
/// Window `i` is `values[i..i + time_steps]` and its target is
/// `values[i + time_steps]`, so a series of length `n > time_steps`
/// produces exactly `n - time_steps` windows. A series with
/// `n <= time_steps` produces empty outputs rather than an error; short
/// inputs are a degenerate case, not a failure.
pub fn make_sequences(values: &[f64], time_steps: usize) -> Result<(Vec<Vec<f64>>, Vec<f64>)> {
    if time_steps == 0 {
        return Err(PreprocessError::InvalidConfig {
            name: "time_steps".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if values.len() <= time_steps {
        return Ok((Vec::new(), Vec::new()));
    }

    let count = values.len() - time_steps;
    let mut windows = Vec::with_capacity(count);
    let mut targets = Vec::with_capacity(count);
    for i in 0..count {
        windows.push(values[i..i + time_steps].to_vec());
        targets.push(values[i + time_steps]);
    }

    Ok((windows, targets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count_and_content() {
        let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let (windows, targets) = make_sequences(&values, 3).unwrap();

        assert_eq!(windows.len(), 7);
        assert_eq!(targets.len(), 7);
        assert_eq!(windows[0], vec![1.0, 2.0, 3.0]);
        assert_eq!(windows[1], vec![2.0, 3.0, 4.0]);
        assert_eq!(windows[6], vec![7.0, 8.0, 9.0]);
        assert_eq!(targets, vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    }

    #[test]
    fn test_windows_match_slices() {
        let values = vec![0.5, 0.1, 0.9, 0.4, 0.7, 0.2];
        let time_steps = 2;
        let (windows, _) = make_sequences(&values, time_steps).unwrap();

        for (i, window) in windows.iter().enumerate() {
            assert_eq!(window.as_slice(), &values[i..i + time_steps]);
        }
    }

    #[test]
    fn test_short_series_returns_empty() {
        let values = vec![1.0, 2.0, 3.0];
        let (windows, targets) = make_sequences(&values, 3).unwrap();
        assert!(windows.is_empty());
        assert!(targets.is_empty());

        let (windows, targets) = make_sequences(&values, 10).unwrap();
        assert!(windows.is_empty());
        assert!(targets.is_empty());
    }

    #[test]
    fn test_empty_series_returns_empty() {
        let (windows, targets) = make_sequences(&[], 5).unwrap();
        assert!(windows.is_empty());
        assert!(targets.is_empty());
    }

    #[test]
    fn test_zero_time_steps_is_config_error() {
        let err = make_sequences(&[1.0, 2.0], 0).unwrap_err();
        assert!(matches!(err, PreprocessError::InvalidConfig { .. }));
    }

    #[test]
    fn test_single_window() {
        let (windows, targets) = make_sequences(&[1.0, 2.0, 3.0, 4.0], 3).unwrap();
        assert_eq!(windows, vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(targets, vec![4.0]);
    }
}
