//! # analytics_core
//!
//! Numerical and text analytics engines.
//!
//! ## Modules
//!
//! - `numeric` - Normalization, linear regression, correlations, feature summaries
//! - `text` - Summarization, sentiment, keywords, n-gram TF-IDF, composite insights
//! - `api` - Request validation and dispatch
//! - `config` - Defaults and limits loaded from TOML
//! - `error` - Error types
//!
//! ## Example
//!
//! ```
//! use analytics_core::{correlations, summarize_text};
//!
//! let corr = correlations(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
//! assert_eq!(corr.pearson, 1.0);
//!
//! let summary = summarize_text("Short.", 3);
//! assert_eq!(summary.summary, "Short.");
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod numeric;
pub mod text;
pub mod utils;

pub use api::{AnalyticsService, Operation};
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use numeric::{correlations, feature_summary, linear_regression, normalize};
pub use text::{
    analyse_sentiment, article_insights, build_text_insights, compute_tf_idf, extract_keywords,
    summarize_text,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
