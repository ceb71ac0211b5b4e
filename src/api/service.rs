//! Dispatch of validated requests to the engines

use super::requests::*;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::numeric::{correlations, feature_summary, linear_regression, normalize};
use crate::text::{
    analyse_sentiment, article_insights, build_text_insights, compute_tf_idf, extract_keywords,
    summarize_text, ArticleOptions,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Any request the service accepts, tagged by `"operation"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum Operation {
    Normalize(NormalizeRequest),
    Regression(RegressionRequest),
    Correlate(CorrelateRequest),
    FeatureSummary(FeatureSummaryRequest),
    Summarize(SummarizeRequest),
    Sentiment(SentimentRequest),
    Keywords(KeywordsRequest),
    #[serde(rename = "tfidf")]
    TfIdf(TfIdfRequest),
    Insights(InsightsRequest),
    ArticleInsights(ArticleInsightsRequest),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Normalize(_) => "normalize",
            Operation::Regression(_) => "regression",
            Operation::Correlate(_) => "correlate",
            Operation::FeatureSummary(_) => "featureSummary",
            Operation::Summarize(_) => "summarize",
            Operation::Sentiment(_) => "sentiment",
            Operation::Keywords(_) => "keywords",
            Operation::TfIdf(_) => "tfidf",
            Operation::Insights(_) => "insights",
            Operation::ArticleInsights(_) => "articleInsights",
        }
    }

    fn validate(&self, config: &Config) -> Result<()> {
        let limits = &config.limits;
        match self {
            Operation::Normalize(r) => r.validate(limits),
            Operation::Regression(r) => r.validate(limits),
            Operation::Correlate(r) => r.validate(limits),
            Operation::FeatureSummary(r) => r.validate(limits),
            Operation::Summarize(r) => r.validate(limits),
            Operation::Sentiment(r) => r.validate(limits),
            Operation::Keywords(r) => r.validate(limits),
            Operation::TfIdf(r) => r.validate(limits),
            Operation::Insights(r) => r.validate(limits),
            Operation::ArticleInsights(r) => r.validate(limits),
        }
    }
}

/// Validates requests, fills defaults and runs the matching engine
#[derive(Debug, Clone, Default)]
pub struct AnalyticsService {
    config: Config,
}

impl AnalyticsService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one operation and return its response body.
    pub fn handle(&self, operation: Operation) -> Result<Value> {
        debug!(operation = operation.name(), "handling request");
        operation.validate(&self.config)?;
        let defaults = &self.config.defaults;

        let response = match operation {
            Operation::Normalize(r) => serde_json::to_value(normalize(&r.values)?)?,
            Operation::Regression(r) => {
                serde_json::to_value(linear_regression(&r.features, &r.targets)?)?
            }
            Operation::Correlate(r) => serde_json::to_value(correlations(&r.series_a, &r.series_b)?)?,
            Operation::FeatureSummary(r) => serde_json::to_value(feature_summary(&r.features)?)?,
            Operation::Summarize(r) => {
                let max_sentences = r.max_sentences.unwrap_or(defaults.max_sentences);
                serde_json::to_value(summarize_text(&r.text, max_sentences))?
            }
            Operation::Sentiment(r) => serde_json::to_value(analyse_sentiment(&r.text))?,
            Operation::Keywords(r) => {
                let top_k = r.top_k.unwrap_or(defaults.top_k);
                serde_json::to_value(extract_keywords(&r.text, top_k))?
            }
            Operation::TfIdf(r) => {
                let top_k = r.top_k.unwrap_or(defaults.tfidf_top_k);
                let ngram = r.ngram.unwrap_or(defaults.ngram);
                serde_json::to_value(compute_tf_idf(&r.documents, top_k, ngram))?
            }
            Operation::Insights(r) => {
                let max_sentences = r.max_sentences.unwrap_or(defaults.max_sentences);
                let keyword_top_k = r.keyword_top_k.unwrap_or(defaults.keyword_top_k);
                serde_json::to_value(build_text_insights(&r.text, max_sentences, keyword_top_k))?
            }
            Operation::ArticleInsights(r) => {
                let options = ArticleOptions {
                    summary_sentences: r.summary_sentences.unwrap_or(defaults.max_sentences),
                    keyword_top_k: r.keyword_top_k.unwrap_or(defaults.keyword_top_k),
                    tfidf_top_k: r.tfidf_top_k.unwrap_or(defaults.tfidf_top_k),
                    ngram: r.ngram.unwrap_or(defaults.ngram),
                };
                serde_json::to_value(article_insights(&r.articles, options))?
            }
        };
        Ok(response)
    }

    /// Parse a tagged JSON request and run it.
    ///
    /// A body that does not parse into an [`Operation`] (unknown operation,
    /// missing field, wrong type) is a validation failure on `body`.
    pub fn handle_json(&self, body: &str) -> Result<Value> {
        let operation: Operation =
            serde_json::from_str(body).map_err(|e| Error::invalid("body", e.to_string()))?;
        self.handle(operation)
    }
}
