//! Scaler implementations.

use preprocess_api::ScalerKind;
use preprocess_spi::{PreprocessError, Result, Scaler};
use serde::{Deserialize, Serialize};

/// Construct an unfitted scaler for the configured strategy.
pub fn scaler_for(kind: ScalerKind) -> Box<dyn Scaler> {
    match kind {
        ScalerKind::MinMax => Box::new(MinMaxScaler::new()),
        ScalerKind::Standard => Box::new(StandardScaler::new()),
    }
}

fn finite_values(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(PreprocessError::InvalidInput("input is empty".to_string()));
    }
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(PreprocessError::InvalidInput(
            "input contains no finite values".to_string(),
        ));
    }
    Ok(finite)
}

// ============================================================================
// Min-Max Scaler
// ============================================================================

/// Min-max scaler mapping values into the [0, 1] range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: f64,
    max: f64,
    fitted: bool,
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            fitted: false,
        }
    }

    /// Restore a scaler from persisted parameters.
    pub fn from_params(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            fitted: true,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scaler for MinMaxScaler {
    fn fit(&mut self, values: &[f64]) -> Result<()> {
        let finite = finite_values(values)?;
        self.min = finite.iter().cloned().fold(f64::INFINITY, f64::min);
        self.max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        self.fitted = true;
        Ok(())
    }

    fn transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(PreprocessError::NotFitted);
        }
        let range = self.max - self.min;
        if range.abs() < 1e-10 {
            // Constant reference series maps to the midpoint.
            return Ok(vec![0.5; values.len()]);
        }
        Ok(values.iter().map(|&x| (x - self.min) / range).collect())
    }

    fn inverse_transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(PreprocessError::NotFitted);
        }
        let range = self.max - self.min;
        Ok(values.iter().map(|&x| x * range + self.min).collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

// ============================================================================
// Standard (z-score) Scaler
// ============================================================================

/// Standard scaler mapping values to zero mean and unit variance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: f64,
    std_dev: f64,
    fitted: bool,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            fitted: false,
        }
    }

    /// Restore a scaler from persisted parameters.
    pub fn from_params(mean: f64, std_dev: f64) -> Self {
        Self {
            mean,
            std_dev,
            fitted: true,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scaler for StandardScaler {
    fn fit(&mut self, values: &[f64]) -> Result<()> {
        let finite = finite_values(values)?;
        let n = finite.len() as f64;
        self.mean = finite.iter().sum::<f64>() / n;
        self.std_dev =
            (finite.iter().map(|x| (x - self.mean).powi(2)).sum::<f64>() / n).sqrt();
        self.fitted = true;
        Ok(())
    }

    fn transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(PreprocessError::NotFitted);
        }
        if self.std_dev < 1e-10 {
            return Ok(vec![0.0; values.len()]);
        }
        Ok(values
            .iter()
            .map(|&x| (x - self.mean) / self.std_dev)
            .collect())
    }

    fn inverse_transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(PreprocessError::NotFitted);
        }
        Ok(values
            .iter()
            .map(|&x| x * self.std_dev + self.mean)
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
