//! Ordinary least squares regression
//!
//! Solves the normal equations `(X'X) w = X'y` for a design matrix with a
//! trailing column of ones, so the last solution element is the intercept.

use super::solver::gauss_jordan;
use crate::error::{Error, Result};
use crate::utils::{round_all, round_to};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A fitted linear model together with its in-sample predictions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionModel {
    /// One weight per feature column
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Coefficient of determination, 0 when the targets are constant
    pub r_squared: f64,
    pub predictions: Vec<f64>,
}

impl RegressionModel {
    /// Predict a single observation with the (rounded) fitted weights
    pub fn predict(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(Error::DimensionMismatch {
                expected: self.coefficients.len(),
                got: row.len(),
            });
        }
        Ok(affine(row, &self.coefficients, self.intercept))
    }
}

/// Fit `targets ≈ features · w + b` by least squares.
///
/// Every row must be non-empty and as wide as the first one.
pub fn linear_regression(features: &[Vec<f64>], targets: &[f64]) -> Result<RegressionModel> {
    if features.len() != targets.len() {
        return Err(Error::DimensionMismatch {
            expected: features.len(),
            got: targets.len(),
        });
    }
    if features.is_empty() {
        return Err(Error::InsufficientData(
            "at least one observation required".to_string(),
        ));
    }

    let m = features.len();
    let n = features[0].len();
    for (row_idx, row) in features.iter().enumerate() {
        if row.is_empty() {
            return Err(Error::EmptyRow { row: row_idx });
        }
        if row.len() != n {
            return Err(Error::RaggedRow {
                row: row_idx,
                expected: n,
                got: row.len(),
            });
        }
    }
    debug!(observations = m, features = n, "fitting linear regression");

    let (xtx, xty) = normal_equations(features, targets, n);
    let solved = gauss_jordan(&xtx, &xty)?;
    if solved.len() != n + 1 || solved.iter().any(|v| !v.is_finite()) {
        return Err(Error::SolverFailed);
    }

    let intercept = solved[n];
    let weights: Vec<f64> = solved.iter().take(n).copied().collect();

    let predictions: Vec<f64> = features
        .iter()
        .map(|row| affine(row, &weights, intercept))
        .collect();

    let mean_y = targets.iter().sum::<f64>() / m as f64;
    let ss_tot: f64 = targets.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = targets
        .iter()
        .zip(predictions.iter())
        .map(|(y, p)| (y - p).powi(2))
        .sum();
    let r_squared = if ss_tot != 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        0.0
    };

    Ok(RegressionModel {
        coefficients: round_all(&weights, 6),
        intercept: round_to(intercept, 6),
        r_squared: round_to(r_squared, 6),
        predictions: round_all(&predictions, 6),
    })
}

/// Accumulate `X'X` and `X'y` row by row over the augmented design matrix.
fn normal_equations(features: &[Vec<f64>], targets: &[f64], n: usize) -> (Array2<f64>, Array1<f64>) {
    let size = n + 1;
    let mut xtx = Array2::<f64>::zeros((size, size));
    let mut xty = Array1::<f64>::zeros(size);

    let mut augmented = vec![0.0; size];
    for (row, &y) in features.iter().zip(targets.iter()) {
        augmented[..n].copy_from_slice(row);
        augmented[n] = 1.0;

        for i in 0..size {
            let value = augmented[i];
            xty[i] += value * y;
            for j in 0..size {
                xtx[[i, j]] += value * augmented[j];
            }
        }
    }

    (xtx, xty)
}

fn affine(row: &[f64], weights: &[f64], intercept: f64) -> f64 {
    row.iter()
        .zip(weights.iter())
        .fold(intercept, |acc, (x, w)| acc + x * w)
}
