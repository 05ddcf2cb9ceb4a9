//! Percentile computation.

use scoring_spi::{Result, ScoringError};

/// Percentile with linear interpolation between order statistics.
///
/// Matches the NumPy default: for a sorted batch of `n` values the
/// percentile `p` sits at fractional rank `p / 100 * (n - 1)` and is
/// interpolated between the two surrounding values.
pub fn percentile(values: &[f64], p: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(ScoringError::InvalidInput(
            "cannot take percentile of empty batch".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(ScoringError::InvalidConfig {
            name: "percentile".to_string(),
            reason: format!("{} is outside [0, 100]", p),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    let frac = rank - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}
