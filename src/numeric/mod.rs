//! Numerical analytics engine
//!
//! Stateless functions over plain numeric input:
//! - Normalization (z-score, min-max, robust scaling) with descriptive statistics
//! - Multivariate linear regression via the normal equations
//! - Pearson, Spearman and Kendall correlations
//! - Per-column feature summaries

mod correlation;
mod normalize;
mod regression;
mod solver;
mod stats;
mod summary;

pub use correlation::{correlations, kendall_tau, pearson, rank, spearman, CorrelationResult};
pub use normalize::{normalize, NormalizeStats, Normalized};
pub use regression::{linear_regression, RegressionModel};
pub use solver::{gauss_jordan, PIVOT_EPSILON};
pub use stats::{mean, percentile, population_variance};
pub use summary::{feature_summary, FeatureSummary};
