//! Series normalization
//!
//! Produces three parallel rescalings of a series together with the
//! statistics they were derived from.

use super::stats::{mean, min_max, percentile, population_variance};
use crate::error::{Error, Result};
use crate::utils::{round_all, round_to};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// IQR values at or below this magnitude are treated as zero
const IQR_TOLERANCE: f64 = 1e-9;

/// Descriptive statistics of a normalized series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeStats {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Unrounded
    pub min: f64,
    /// Unrounded
    pub max: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

/// Result of [`normalize`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    /// `(x - mean) / std_dev`
    #[serde(rename = "zscores")]
    pub z_scores: Vec<f64>,
    /// `(x - min) / (max - min)`
    #[serde(rename = "minMaxScaled")]
    pub min_max_scaled: Vec<f64>,
    /// `(x - median) / IQR`
    #[serde(rename = "robustScaled")]
    pub robust_scaled: Vec<f64>,
    #[serde(rename = "statistics")]
    pub stats: NormalizeStats,
}

/// Normalize a series of at least two values.
pub fn normalize(values: &[f64]) -> Result<Normalized> {
    if values.len() < 2 {
        return Err(Error::InsufficientData(format!(
            "normalization needs at least two values, got {}",
            values.len()
        )));
    }
    debug!(n = values.len(), "normalizing series");

    let mean = mean(values);
    let variance = population_variance(values, mean);
    let std_dev = variance.sqrt();
    let (min, max) = min_max(values);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let mut ordered = values.to_vec();
    ordered.sort_by(|a, b| a.total_cmp(b));
    let median = percentile(&ordered, 50.0);
    let q1 = percentile(&ordered, 25.0);
    let q3 = percentile(&ordered, 75.0);
    let iqr = q3 - q1;
    let robust_scale = if iqr.abs() > IQR_TOLERANCE { iqr } else { 1.0 };

    let z_scores: Vec<f64> = values
        .iter()
        .map(|&v| {
            if std_dev == 0.0 {
                return 0.0;
            }
            let z = (v - mean) / std_dev;
            if z.is_finite() {
                z
            } else {
                0.0
            }
        })
        .collect();
    let min_max_scaled: Vec<f64> = values.iter().map(|&v| (v - min) / range).collect();
    let robust_scaled: Vec<f64> = values.iter().map(|&v| (v - median) / robust_scale).collect();

    Ok(Normalized {
        z_scores: round_all(&z_scores, 4),
        min_max_scaled: round_all(&min_max_scaled, 4),
        robust_scaled: round_all(&robust_scaled, 4),
        stats: NormalizeStats {
            mean: round_to(mean, 4),
            variance: round_to(variance, 4),
            std_dev: round_to(std_dev, 4),
            min,
            max,
            median: round_to(median, 4),
            q1: round_to(q1, 4),
            q3: round_to(q3, 4),
            iqr: round_to(iqr, 4),
        },
    })
}
