//! Correlation measures
//!
//! Pearson product-moment, Spearman rank and Kendall tau-a correlations
//! between two equal-length series.

use super::stats::mean;
use crate::error::{Error, Result};
use crate::utils::round_to;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// All three coefficients for a pair of series, rounded to 4 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub pearson: f64,
    pub spearman: f64,
    pub kendall: f64,
}

/// Compute Pearson, Spearman and Kendall correlations.
pub fn correlations(series_a: &[f64], series_b: &[f64]) -> Result<CorrelationResult> {
    if series_a.len() != series_b.len() {
        return Err(Error::DimensionMismatch {
            expected: series_a.len(),
            got: series_b.len(),
        });
    }
    if series_a.len() < 2 {
        return Err(Error::InsufficientData(
            "series must contain at least two values".to_string(),
        ));
    }
    debug!(n = series_a.len(), "computing correlations");

    Ok(CorrelationResult {
        pearson: round_to(pearson(series_a, series_b), 4),
        spearman: round_to(spearman(series_a, series_b), 4),
        kendall: round_to(kendall_tau(series_a, series_b), 4),
    })
}

/// Pearson correlation; a zero denominator is replaced by 1, giving 0.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut numerator = 0.0;
    let mut denom_x = 0.0;
    let mut denom_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    let denominator = (denom_x * denom_y).sqrt();
    if denominator == 0.0 || denominator.is_nan() {
        numerator
    } else {
        numerator / denominator
    }
}

/// Spearman rank correlation: Pearson over average ranks
pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    pearson(&rank(x), &rank(y))
}

/// 1-based ranks; tied values share the mean of the positions they occupy.
pub fn rank(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut indexed: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        let mut rank_sum = 0.0;
        while j < n && indexed[j].1 == indexed[i].1 {
            rank_sum += (j + 1) as f64;
            j += 1;
        }
        // NaN never equals itself; give it its own position
        if j == i {
            rank_sum = (i + 1) as f64;
            j = i + 1;
        }

        let avg_rank = rank_sum / (j - i) as f64;
        for item in &indexed[i..j] {
            ranks[item.0] = avg_rank;
        }
        i = j;
    }

    ranks
}

/// Kendall tau-a over all unordered pairs.
///
/// A pair is concordant when both sign differences agree, discordant
/// otherwise; no tie correction is applied.
pub fn kendall_tau(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    let mut concordant = 0usize;
    let mut discordant = 0usize;

    for i in 0..n {
        for j in (i + 1)..n {
            if sign(x[i] - x[j]) == sign(y[i] - y[j]) {
                concordant += 1;
            } else {
                discordant += 1;
            }
        }
    }

    let total = concordant + discordant;
    if total == 0 {
        0.0
    } else {
        (concordant as f64 - discordant as f64) / total as f64
    }
}

/// Three-way sign, unlike `f64::signum` which maps 0 to 1
fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_self_and_negation() {
        let a = [1.0, 2.5, 3.0, 7.0, 11.0];
        let neg: Vec<f64> = a.iter().map(|v| -v).collect();

        let same = correlations(&a, &a).unwrap();
        let opposite = correlations(&a, &neg).unwrap();

        assert_eq!(same.pearson, 1.0);
        assert_eq!(opposite.pearson, -1.0);
        assert_eq!(opposite.spearman, -1.0);
        assert_eq!(opposite.kendall, -1.0);
    }

    #[test]
    fn test_rank_with_ties() {
        let ranks = rank(&[10.0, 20.0, 20.0, 30.0]);
        assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);

        let ranks = rank(&[3.0, 1.0, 2.0]);
        assert_eq!(ranks, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_spearman_monotonic_invariance() {
        let a = [0.5, 1.2, 3.3, 2.1, 9.0, 4.4];
        let b = [2.0, 1.0, 5.0, 3.0, 8.0, 7.0];
        let cubed: Vec<f64> = a.iter().map(|v: &f64| v.powi(3)).collect();
        let exp_b: Vec<f64> = b.iter().map(|v: &f64| v.exp()).collect();

        let base = correlations(&a, &b).unwrap();
        let transformed = correlations(&cubed, &exp_b).unwrap();

        assert_eq!(base.spearman, transformed.spearman);
        assert_eq!(base.kendall, transformed.kendall);
    }

    #[test]
    fn test_kendall_ordered_and_reversed() {
        assert_eq!(kendall_tau(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 1.0);
        assert_eq!(kendall_tau(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0);
    }

    #[test]
    fn test_kendall_ties_count_as_discordant() {
        // Pair (0,1) ties in x only: sign 0 vs -1
        let tau = kendall_tau(&[1.0, 1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!((tau - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series_yields_zero_pearson() {
        let result = correlations(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(result.pearson, 0.0);
        assert_eq!(result.spearman, 0.0);
    }

    #[test]
    fn test_input_errors() {
        assert!(matches!(
            correlations(&[1.0, 2.0], &[1.0]),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            correlations(&[1.0], &[1.0]),
            Err(Error::InsufficientData(_))
        ));
    }
}
