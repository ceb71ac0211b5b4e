//! Extractive summarization
//!
//! Sentences are scored by the normalized frequency of their words, damped
//! by sentence length and boosted by position, and the best ones are
//! returned in document order.

use super::tokenizer::{frequencies, normalized_frequencies, Tokenizer};
use crate::utils::{by_score_desc, round_to};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An extractive summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Selected sentences joined by single spaces
    pub summary: String,
    /// Selected sentences in document order
    pub sentences: Vec<String>,
    /// `len(summary) / len(text)`
    pub compression_ratio: f64,
}

impl Summary {
    fn empty() -> Self {
        Self {
            summary: String::new(),
            sentences: Vec::new(),
            compression_ratio: 0.0,
        }
    }
}

/// Frequency-based sentence extractor
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    tokenizer: Tokenizer,
}

impl Summarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Pick up to `max_sentences` sentences from `text`.
    pub fn summarize(&self, text: &str, max_sentences: usize) -> Summary {
        let sentences = self.tokenizer.split_sentences(text);
        if sentences.is_empty() || max_sentences == 0 {
            return Summary::empty();
        }
        debug!(sentences = sentences.len(), max_sentences, "summarizing text");

        let scores = self.score_sentences(text, &sentences);

        let mut ranked = sentences.clone();
        ranked.sort_by(|a, b| by_score_desc(score_of(&scores, a), score_of(&scores, b)));
        ranked.truncate(max_sentences.min(sentences.len()));
        // Identical sentences share one entry, positioned at their first occurrence
        ranked.sort_by_key(|sentence| scores.get_index_of(sentence));

        let summary = ranked.join(" ");
        let text_len = text.chars().count().max(1);
        let compression_ratio = summary.chars().count() as f64 / text_len as f64;

        Summary {
            summary,
            sentences: ranked.into_iter().map(str::to_string).collect(),
            compression_ratio: round_to(compression_ratio, 4),
        }
    }

    /// Score per distinct sentence text; a repeated sentence keeps the score
    /// of its last occurrence.
    fn score_sentences<'a>(&self, text: &str, sentences: &[&'a str]) -> IndexMap<&'a str, f64> {
        let words = self.tokenizer.tokenize(text);
        let weights = normalized_frequencies(&frequencies(&words));

        let mut scores = IndexMap::with_capacity(sentences.len());
        for (index, &sentence) in sentences.iter().enumerate() {
            let sentence_words = self.tokenizer.tokenize(sentence);
            let weight: f64 = sentence_words
                .iter()
                .map(|word| weights.get(word).copied().unwrap_or(0.0))
                .sum();
            let length_penalty = ((sentence_words.len() + 1) as f64).log10().max(1.0);
            let position_bonus = 1.0 / (index + 1) as f64;
            scores.insert(sentence, weight / length_penalty + position_bonus);
        }
        scores
    }
}

fn score_of(scores: &IndexMap<&str, f64>, sentence: &str) -> f64 {
    scores.get(sentence).copied().unwrap_or(0.0)
}

/// Summarize with the default tokenizer
pub fn summarize_text(text: &str, max_sentences: usize) -> Summary {
    Summarizer::new().summarize(text, max_sentences)
}
