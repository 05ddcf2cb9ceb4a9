//! Trainable model implementations.
//!
//! Both models follow the fit-once / score-read-only lifecycle: parameters
//! are learned during a training phase, serialized, and loaded back for
//! scoring without further mutation.

use scoring_api::TrainConfig;
use scoring_spi::{ReconstructionModel, Result, ScoringError, SequenceModel};
use serde::{Deserialize, Serialize};

// ============================================================================
// Autoregressive Forecaster
// ============================================================================

/// Linear autoregressive next-step forecaster.
///
/// Predicts `y = w · window + b` with weights of length `time_steps`,
/// fit by least squares over (window, target) pairs. The weight length is
/// the single source of truth for `time_steps`, so windowing and model
/// parameters cannot drift apart between training and scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArForecaster {
    weights: Vec<f64>,
    bias: f64,
}

impl ArForecaster {
    /// Restore a forecaster from persisted parameters.
    pub fn from_params(weights: Vec<f64>, bias: f64) -> Result<Self> {
        if weights.is_empty() {
            return Err(ScoringError::InvalidInput(
                "forecaster weights must not be empty".to_string(),
            ));
        }
        Ok(Self { weights, bias })
    }

    /// Fit by ridge-stabilized least squares over training windows.
    ///
    /// A tiny ridge penalty keeps the normal equations solvable when
    /// windows are collinear, as they are for e.g. a pure linear ramp.
    pub fn fit(windows: &[Vec<f64>], targets: &[f64]) -> Result<Self> {
        if windows.is_empty() {
            return Err(ScoringError::InvalidInput(
                "cannot fit forecaster on zero windows".to_string(),
            ));
        }
        if windows.len() != targets.len() {
            return Err(ScoringError::DimensionMismatch {
                left: windows.len(),
                right: targets.len(),
            });
        }

        let time_steps = windows[0].len();
        let dim = time_steps + 1; // weights + bias

        // Normal equations: (X^T X + λI) w = X^T y, bias unpenalized.
        let mut xtx = vec![vec![0.0f64; dim]; dim];
        let mut xty = vec![0.0f64; dim];
        for (window, &target) in windows.iter().zip(targets.iter()) {
            if window.len() != time_steps {
                return Err(ScoringError::DimensionMismatch {
                    left: time_steps,
                    right: window.len(),
                });
            }
            for i in 0..dim {
                let xi = if i < time_steps { window[i] } else { 1.0 };
                xty[i] += xi * target;
                for j in 0..dim {
                    let xj = if j < time_steps { window[j] } else { 1.0 };
                    xtx[i][j] += xi * xj;
                }
            }
        }
        let lambda = 1e-8;
        for (i, row) in xtx.iter_mut().enumerate().take(time_steps) {
            row[i] += lambda;
        }

        let solution = solve_linear_system(xtx, xty)?;
        let (weights, bias) = solution.split_at(time_steps);
        Ok(Self {
            weights: weights.to_vec(),
            bias: bias[0],
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }
}

impl SequenceModel for ArForecaster {
    fn predict(&self, window: &[f64]) -> Result<f64> {
        if window.len() != self.weights.len() {
            return Err(ScoringError::DimensionMismatch {
                left: self.weights.len(),
                right: window.len(),
            });
        }
        let dot: f64 = self
            .weights
            .iter()
            .zip(window.iter())
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.bias)
    }

    fn time_steps(&self) -> usize {
        self.weights.len()
    }
}

/// Gaussian elimination with partial pivoting.
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .ok_or_else(|| ScoringError::Numerical("empty system".to_string()))?;
        if a[pivot_row][col].abs() < 1e-12 {
            return Err(ScoringError::Numerical(
                "singular matrix in least squares fit".to_string(),
            ));
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0f64; n];
    for row in (0..n).rev() {
        let sum: f64 = ((row + 1)..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - sum) / a[row][row];
    }
    Ok(x)
}

// ============================================================================
// Dense Autoencoder
// ============================================================================

/// Single-hidden-unit dense autoencoder for univariate points.
///
/// `y = sigmoid(w2 * relu(w1 * x + b1) + b2)`, trained by full-batch
/// gradient descent on squared reconstruction error. Suited to min-max
/// normalized input, where both the data and the sigmoid output live in
/// (0, 1) and reconstruction error grows toward the extremes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseAutoencoder {
    w1: f64,
    b1: f64,
    w2: f64,
    b2: f64,
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl DenseAutoencoder {
    /// Restore an autoencoder from persisted parameters.
    pub fn from_params(w1: f64, b1: f64, w2: f64, b2: f64) -> Self {
        Self { w1, b1, w2, b2 }
    }

    /// Fit to normalized training data by full-batch gradient descent.
    ///
    /// Initialization is deterministic so training is reproducible.
    pub fn fit(data: &[f64], config: TrainConfig) -> Result<Self> {
        if data.is_empty() {
            return Err(ScoringError::InvalidInput(
                "cannot fit autoencoder on empty data".to_string(),
            ));
        }

        let mut model = Self {
            w1: 1.0,
            b1: 0.1,
            w2: 1.0,
            b2: -0.5,
        };
        let n = data.len() as f64;

        for _ in 0..config.epochs {
            let mut grad = [0.0f64; 4];
            for &x in data {
                let z1 = model.w1 * x + model.b1;
                let h = z1.max(0.0);
                let y = sigmoid(model.w2 * h + model.b2);

                // d(error)/d(pre-sigmoid), error = (y - x)^2
                let delta_out = 2.0 * (y - x) * y * (1.0 - y);
                grad[2] += delta_out * h;
                grad[3] += delta_out;

                let delta_hidden = if z1 > 0.0 { delta_out * model.w2 } else { 0.0 };
                grad[0] += delta_hidden * x;
                grad[1] += delta_hidden;
            }
            model.w1 -= config.learning_rate * grad[0] / n;
            model.b1 -= config.learning_rate * grad[1] / n;
            model.w2 -= config.learning_rate * grad[2] / n;
            model.b2 -= config.learning_rate * grad[3] / n;
        }

        Ok(model)
    }

    pub fn params(&self) -> (f64, f64, f64, f64) {
        (self.w1, self.b1, self.w2, self.b2)
    }
}

impl ReconstructionModel for DenseAutoencoder {
    fn reconstruct(&self, value: f64) -> Result<f64> {
        let h = (self.w1 * value + self.b1).max(0.0);
        Ok(sigmoid(self.w2 * h + self.b2))
    }
}
