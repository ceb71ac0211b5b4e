//! Column-wise feature summaries

use super::stats::{mean, min_max, population_variance};
use crate::error::{Error, Result};
use crate::utils::round_to;
use serde::{Deserialize, Serialize};

/// Summary statistics of one feature column, rounded to 4 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

/// Summarize every column of a rectangular feature matrix.
pub fn feature_summary(features: &[Vec<f64>]) -> Result<Vec<FeatureSummary>> {
    let first = features.first().ok_or_else(|| {
        Error::InsufficientData("feature matrix cannot be empty".to_string())
    })?;
    let cols = first.len();
    if cols == 0 {
        return Err(Error::EmptyRow { row: 0 });
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(features.len()); cols];
    for (row_idx, row) in features.iter().enumerate() {
        if row.len() != cols {
            return Err(Error::RaggedRow {
                row: row_idx,
                expected: cols,
                got: row.len(),
            });
        }
        for (col, &value) in row.iter().enumerate() {
            columns[col].push(value);
        }
    }

    Ok(columns
        .iter()
        .map(|values| {
            let m = mean(values);
            let std_dev = population_variance(values, m).sqrt();
            let (min, max) = min_max(values);
            FeatureSummary {
                mean: round_to(m, 4),
                min: round_to(min, 4),
                max: round_to(max, 4),
                std_dev: round_to(std_dev, 4),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_per_column() {
        let features = vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]];
        let summary = feature_summary(&features).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].mean, 2.0);
        assert_eq!(summary[0].min, 1.0);
        assert_eq!(summary[0].max, 3.0);
        assert_eq!(summary[0].std_dev, 0.8165);
        assert_eq!(summary[1].mean, 20.0);
        assert_eq!(summary[1].std_dev, 8.165);
    }

    #[test]
    fn test_single_row_is_allowed() {
        let summary = feature_summary(&[vec![4.5]]).unwrap();
        assert_eq!(summary[0].std_dev, 0.0);
        assert_eq!(summary[0].mean, 4.5);
    }

    #[test]
    fn test_rejects_malformed_matrices() {
        assert!(matches!(feature_summary(&[]), Err(Error::InsufficientData(_))));
        assert!(matches!(feature_summary(&[vec![]]), Err(Error::EmptyRow { row: 0 })));
        assert!(matches!(
            feature_summary(&[vec![1.0, 2.0], vec![3.0]]),
            Err(Error::RaggedRow { row: 1, expected: 2, got: 1 })
        ));
    }
}
