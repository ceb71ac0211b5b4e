//! Configuration management
//!
//! Request defaults and validation limits, loaded from TOML.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// Values used when a request omits an optional parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub max_sentences: usize,
    pub top_k: usize,
    pub keyword_top_k: usize,
    pub tfidf_top_k: usize,
    pub ngram: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_sentences: 3,
            top_k: 5,
            keyword_top_k: 5,
            tfidf_top_k: 5,
            ngram: 1,
        }
    }
}

/// Request preconditions checked before any engine is invoked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub min_series_len: usize,
    pub min_observations: usize,
    pub min_summary_text: usize,
    pub min_sentiment_text: usize,
    pub min_keyword_text: usize,
    pub min_documents: usize,
    pub min_document_len: usize,
    pub max_sentences: [usize; 2],
    pub keyword_top_k: [usize; 2],
    pub insights_keyword_top_k: [usize; 2],
    pub tfidf_top_k: [usize; 2],
    pub ngram: [usize; 2],
    /// Article batches have their own, tighter bounds
    pub min_articles: usize,
    pub article_summary_sentences: [usize; 2],
    pub article_keyword_top_k: [usize; 2],
    pub article_tfidf_top_k: [usize; 2],
    pub article_ngram: [usize; 2],
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_series_len: 2,
            min_observations: 2,
            min_summary_text: 10,
            min_sentiment_text: 3,
            min_keyword_text: 10,
            min_documents: 2,
            min_document_len: 5,
            max_sentences: [1, 10],
            keyword_top_k: [1, 15],
            insights_keyword_top_k: [1, 20],
            tfidf_top_k: [1, 20],
            ngram: [1, 3],
            min_articles: 1,
            article_summary_sentences: [1, 8],
            article_keyword_top_k: [1, 10],
            article_tfidf_top_k: [1, 10],
            article_ngram: [1, 2],
        }
    }
}

impl LimitsConfig {
    pub fn range(bounds: [usize; 2]) -> RangeInclusive<usize> {
        bounds[0]..=bounds[1]
    }

    fn check(&self) -> Result<()> {
        let ranges = [
            ("max_sentences", self.max_sentences),
            ("keyword_top_k", self.keyword_top_k),
            ("insights_keyword_top_k", self.insights_keyword_top_k),
            ("tfidf_top_k", self.tfidf_top_k),
            ("ngram", self.ngram),
            ("article_summary_sentences", self.article_summary_sentences),
            ("article_keyword_top_k", self.article_keyword_top_k),
            ("article_tfidf_top_k", self.article_tfidf_top_k),
            ("article_ngram", self.article_ngram),
        ];
        for (name, [low, high]) in ranges {
            if low == 0 || low > high {
                return Err(Error::Config(format!(
                    "limits.{} must be a non-empty range starting at 1 or above, got [{}, {}]",
                    name, low, high
                )));
            }
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.limits.check()?;
        Ok(config)
    }

    /// Load configuration from file or use default
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create default configuration file
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        Config::default().save(path)
    }
}
