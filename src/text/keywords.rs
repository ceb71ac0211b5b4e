//! Keyword extraction
//!
//! A simplified RAKE-style score: each distinct term of a sentence gains a
//! degree equal to the number of distinct terms in that sentence, and the
//! keyword score is degree divided by the term's frequency in the text.

use super::tokenizer::{frequencies, Tokenizer};
use crate::utils::{by_score_desc, round_to};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ranked keywords with their scores (parallel vectors)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub keywords: Vec<String>,
    /// Degree / frequency, rounded to 4 decimals
    pub scores: Vec<f64>,
}

impl KeywordReport {
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate `(keyword, score)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.keywords
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }
}

/// Degree/frequency keyword extractor
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    tokenizer: Tokenizer,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Return at most `top_k` keywords, best first.
    pub fn extract(&self, text: &str, top_k: usize) -> KeywordReport {
        let frequency = frequencies(&self.tokenizer.tokenize(text));

        let mut degree: IndexMap<String, usize> = IndexMap::new();
        for sentence in self.tokenizer.split_sentences(text) {
            let unique_terms: IndexSet<String> =
                self.tokenizer.tokenize(sentence).into_iter().collect();
            let sentence_degree = unique_terms.len();
            for term in unique_terms {
                *degree.entry(term).or_insert(0) += sentence_degree;
            }
        }

        let mut scored: Vec<(String, f64)> = degree
            .into_iter()
            .map(|(term, deg)| {
                let freq = frequency.get(&term).copied().unwrap_or(1);
                (term, deg as f64 / freq as f64)
            })
            .collect();
        scored.sort_by(|a, b| by_score_desc(a.1, b.1));
        scored.truncate(top_k);
        debug!(keywords = scored.len(), top_k, "extracted keywords");

        let (keywords, scores) = scored
            .into_iter()
            .map(|(term, score)| (term, round_to(score, 4)))
            .unzip();
        KeywordReport { keywords, scores }
    }
}

/// Extract keywords with the default tokenizer
pub fn extract_keywords(text: &str, top_k: usize) -> KeywordReport {
    KeywordExtractor::new().extract(text, top_k)
}
