//! Composite text insights
//!
//! Runs summarization, sentiment and keyword extraction over the same text,
//! and the batch variant that adds corpus-wide TF-IDF terms per article.

use super::keywords::{KeywordExtractor, KeywordReport};
use super::sentiment::{SentimentAnalyzer, SentimentReport};
use super::summarizer::{Summarizer, Summary};
use super::tfidf::NgramTfIdf;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Summary, sentiment and keywords of one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInsights {
    pub summary: Summary,
    pub sentiment: SentimentReport,
    pub keywords: KeywordReport,
}

pub fn build_text_insights(text: &str, max_sentences: usize, keyword_top_k: usize) -> TextInsights {
    TextInsights {
        summary: Summarizer::new().summarize(text, max_sentences),
        sentiment: SentimentAnalyzer::new().analyze(text),
        keywords: KeywordExtractor::new().extract(text, keyword_top_k),
    }
}

/// Insights of one article within a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInsight {
    pub summary: String,
    pub sentences: Vec<String>,
    pub compression_ratio: f64,
    pub sentiment: SentimentReport,
    pub keywords: Vec<String>,
    pub keyword_scores: Vec<f64>,
    /// This article's best n-grams against the whole batch
    pub tfidf_top_terms: Vec<String>,
}

/// Per-article insights plus the batch vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleInsights {
    pub insights: Vec<ArticleInsight>,
    pub vocabulary: Vec<String>,
}

/// Parameters of [`article_insights`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleOptions {
    pub summary_sentences: usize,
    pub keyword_top_k: usize,
    pub tfidf_top_k: usize,
    pub ngram: usize,
}

impl Default for ArticleOptions {
    fn default() -> Self {
        Self {
            summary_sentences: 3,
            keyword_top_k: 5,
            tfidf_top_k: 5,
            ngram: 1,
        }
    }
}

/// Analyse a batch of articles; TF-IDF is fitted over the whole batch.
pub fn article_insights<S: AsRef<str>>(articles: &[S], options: ArticleOptions) -> ArticleInsights {
    debug!(articles = articles.len(), "building article insights");
    let tfidf = NgramTfIdf::new(options.ngram).fit(articles).report(options.tfidf_top_k);
    let summarizer = Summarizer::new();
    let analyzer = SentimentAnalyzer::new();
    let extractor = KeywordExtractor::new();

    let insights = articles
        .iter()
        .zip(tfidf.document_top_terms)
        .map(|(article, tfidf_top_terms)| {
            let article = article.as_ref();
            let summary = summarizer.summarize(article, options.summary_sentences);
            let keywords = extractor.extract(article, options.keyword_top_k);
            ArticleInsight {
                summary: summary.summary,
                sentences: summary.sentences,
                compression_ratio: summary.compression_ratio,
                sentiment: analyzer.analyze(article),
                keywords: keywords.keywords,
                keyword_scores: keywords.scores,
                tfidf_top_terms,
            }
        })
        .collect();

    ArticleInsights {
        insights,
        vocabulary: tfidf.vocabulary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::sentiment::SentimentLabel;

    #[test]
    fn test_text_insights_combine_engines() {
        let text = "The launch was a great success. Customers love the new design. \
                    Shipping had one small delay.";
        let insights = build_text_insights(text, 2, 3);

        assert_eq!(insights.summary.sentences.len(), 2);
        assert_eq!(insights.sentiment.label, SentimentLabel::Positive);
        assert_eq!(insights.keywords.len(), 3);
    }

    #[test]
    fn test_article_insights_align_with_input() {
        let articles = [
            "Wind farms expanded rapidly this year. Turbine output hit records.",
            "Coal plants closed early. Regulators cited terrible emissions problems.",
        ];
        let result = article_insights(&articles, ArticleOptions::default());

        assert_eq!(result.insights.len(), 2);
        assert!(result.insights[0].tfidf_top_terms.contains(&"wind".to_string()));
        assert!(!result.insights[0].tfidf_top_terms.contains(&"coal".to_string()));
        assert_eq!(result.insights[1].sentiment.label, SentimentLabel::Negative);
        assert!(result.vocabulary.windows(2).all(|w| w[0] < w[1]));
    }
}
