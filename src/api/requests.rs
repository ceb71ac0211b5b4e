//! Request payloads and their preconditions
//!
//! Field names follow the camelCase JSON wire format. Optional parameters
//! stay `None` until the service fills them from [`DefaultsConfig`].
//!
//! [`DefaultsConfig`]: crate::config::DefaultsConfig

use crate::config::LimitsConfig;
use crate::error::{Error, FieldError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Precondition check run before an engine is invoked
pub trait Validate {
    /// Report every violated field at once.
    fn validate(&self, limits: &LimitsConfig) -> Result<()>;
}

/// Accumulates field failures of one request
#[derive(Debug, Default)]
struct Violations(Vec<FieldError>);

impl Violations {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    fn min_items<T>(&mut self, field: &str, items: &[T], min: usize, message: &str) {
        if items.len() < min {
            self.push(field, message);
        }
    }

    fn min_chars(&mut self, field: &str, text: &str, min: usize, label: &str) {
        if text.chars().count() < min {
            self.push(field, format!("{} must be at least {} characters", label, min));
        }
    }

    fn in_range(&mut self, field: &str, value: Option<usize>, bounds: [usize; 2], upper: &str) {
        let Some(value) = value else {
            return;
        };
        let range: RangeInclusive<usize> = LimitsConfig::range(bounds);
        if value < *range.start() {
            self.push(field, format!("{} must be at least {}", field, range.start()));
        } else if value > *range.end() {
            self.push(field, format!("{} {} {}", field, upper, range.end()));
        }
    }

    fn finish(self) -> Result<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidRequest(self.0))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizeRequest {
    pub values: Vec<f64>,
}

impl Validate for NormalizeRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_items("values", &self.values, limits.min_series_len, "provide at least two values");
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionRequest {
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

impl Validate for RegressionRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_items(
            "features",
            &self.features,
            limits.min_observations,
            "provide at least two observations",
        );
        for (i, row) in self.features.iter().enumerate() {
            if row.is_empty() {
                v.push(format!("features.{}", i), "feature vectors cannot be empty");
            }
        }
        v.min_items("targets", &self.targets, limits.min_observations, "provide at least two targets");
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelateRequest {
    pub series_a: Vec<f64>,
    pub series_b: Vec<f64>,
}

impl Validate for CorrelateRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_items(
            "seriesA",
            &self.series_a,
            limits.min_series_len,
            "seriesA requires at least two elements",
        );
        v.min_items(
            "seriesB",
            &self.series_b,
            limits.min_series_len,
            "seriesB requires at least two elements",
        );
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummaryRequest {
    pub features: Vec<Vec<f64>>,
}

impl Validate for FeatureSummaryRequest {
    fn validate(&self, _limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_items("features", &self.features, 1, "provide at least one observation");
        if self.features.first().is_some_and(|row| row.is_empty()) {
            v.push("features.0", "feature vectors cannot be empty");
        }
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub max_sentences: Option<usize>,
}

impl Validate for SummarizeRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_chars("text", &self.text, limits.min_summary_text, "text");
        v.in_range("maxSentences", self.max_sentences, limits.max_sentences, "must be at most");
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

impl Validate for SentimentRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_chars("text", &self.text, limits.min_sentiment_text, "text");
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsRequest {
    pub text: String,
    #[serde(default)]
    pub top_k: Option<usize>,
}

impl Validate for KeywordsRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_chars("text", &self.text, limits.min_keyword_text, "text");
        v.in_range("topK", self.top_k, limits.keyword_top_k, "cannot exceed");
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TfIdfRequest {
    pub documents: Vec<String>,
    #[serde(default)]
    pub top_k: Option<usize>,
    #[serde(default)]
    pub ngram: Option<usize>,
}

impl Validate for TfIdfRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_items("documents", &self.documents, limits.min_documents, "provide at least two documents");
        for (i, doc) in self.documents.iter().enumerate() {
            if doc.chars().count() < limits.min_document_len {
                v.push(
                    format!("documents.{}", i),
                    format!("each document must be at least {} characters", limits.min_document_len),
                );
            }
        }
        v.in_range("topK", self.top_k, limits.tfidf_top_k, "cannot exceed");
        v.in_range("ngram", self.ngram, limits.ngram, "cannot exceed");
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    pub text: String,
    #[serde(default)]
    pub max_sentences: Option<usize>,
    #[serde(default)]
    pub keyword_top_k: Option<usize>,
}

impl Validate for InsightsRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_chars("text", &self.text, limits.min_summary_text, "text");
        v.in_range("maxSentences", self.max_sentences, limits.max_sentences, "must be at most");
        v.in_range("keywordTopK", self.keyword_top_k, limits.insights_keyword_top_k, "cannot exceed");
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInsightsRequest {
    pub articles: Vec<String>,
    #[serde(default)]
    pub summary_sentences: Option<usize>,
    #[serde(default)]
    pub keyword_top_k: Option<usize>,
    #[serde(default)]
    pub tfidf_top_k: Option<usize>,
    #[serde(default)]
    pub ngram: Option<usize>,
}

impl Validate for ArticleInsightsRequest {
    fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        let mut v = Violations::default();
        v.min_items("articles", &self.articles, limits.min_articles, "provide at least one article");
        v.in_range(
            "summarySentences",
            self.summary_sentences,
            limits.article_summary_sentences,
            "must be at most",
        );
        v.in_range("keywordTopK", self.keyword_top_k, limits.article_keyword_top_k, "cannot exceed");
        v.in_range("tfidfTopK", self.tfidf_top_k, limits.article_tfidf_top_k, "cannot exceed");
        v.in_range("ngram", self.ngram, limits.article_ngram, "cannot exceed");
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> LimitsConfig {
        LimitsConfig::default()
    }

    #[test]
    fn test_normalize_needs_two_values() {
        let err = NormalizeRequest { values: vec![1.0] }.validate(&limits()).unwrap_err();
        assert_eq!(err.field_errors(), &[FieldError::new("values", "provide at least two values")]);
        assert!(NormalizeRequest { values: vec![1.0, 2.0] }.validate(&limits()).is_ok());
    }

    #[test]
    fn test_regression_reports_every_field() {
        let request = RegressionRequest {
            features: vec![vec![]],
            targets: vec![1.0],
        };
        let err = request.validate(&limits()).unwrap_err();
        let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["features", "features.0", "targets"]);
    }

    #[test]
    fn test_parameter_ranges() {
        let request = KeywordsRequest {
            text: "long enough text".to_string(),
            top_k: Some(16),
        };
        let err = request.validate(&limits()).unwrap_err();
        assert_eq!(err.field_errors()[0].message, "topK cannot exceed 15");

        let request = SummarizeRequest {
            text: "long enough text".to_string(),
            max_sentences: Some(0),
        };
        let err = request.validate(&limits()).unwrap_err();
        assert_eq!(err.field_errors()[0].message, "maxSentences must be at least 1");
    }

    #[test]
    fn test_omitted_parameters_pass() {
        let request: TfIdfRequest =
            serde_json::from_str(r#"{"documents": ["first doc", "second doc"]}"#).unwrap();
        assert_eq!(request.top_k, None);
        assert!(request.validate(&limits()).is_ok());
    }

    #[test]
    fn test_short_documents_are_indexed() {
        let request = TfIdfRequest {
            documents: vec!["fine doc".to_string(), "tiny".to_string()],
            top_k: None,
            ngram: Some(4),
        };
        let err = request.validate(&limits()).unwrap_err();
        let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["documents.1", "ngram"]);
    }

    #[test]
    fn test_single_article_batch_is_accepted() {
        let request: ArticleInsightsRequest =
            serde_json::from_str(r#"{"articles": ["One article that is long enough."]}"#).unwrap();
        assert!(request.validate(&limits()).is_ok());

        let empty = ArticleInsightsRequest {
            articles: Vec::new(),
            summary_sentences: None,
            keyword_top_k: None,
            tfidf_top_k: None,
            ngram: None,
        };
        let err = empty.validate(&limits()).unwrap_err();
        assert_eq!(err.field_errors()[0].message, "provide at least one article");
    }

    #[test]
    fn test_article_bounds_are_tighter() {
        let request = ArticleInsightsRequest {
            articles: vec!["Markets rallied today.".to_string()],
            summary_sentences: Some(10),
            keyword_top_k: Some(11),
            tfidf_top_k: Some(10),
            ngram: Some(3),
        };
        let err = request.validate(&limits()).unwrap_err();
        let messages: Vec<&str> = err.field_errors().iter().map(|e| e.message.as_str()).collect();

        assert_eq!(
            messages,
            vec![
                "summarySentences must be at most 8",
                "keywordTopK cannot exceed 10",
                "ngram cannot exceed 2",
            ]
        );
    }

    #[test]
    fn test_camel_case_fields() {
        let request: CorrelateRequest =
            serde_json::from_str(r#"{"seriesA": [1, 2], "seriesB": [2, 4]}"#).unwrap();
        assert_eq!(request.series_b, vec![2.0, 4.0]);
    }
}
