//! Fixed word lists
//!
//! Stop-words and the general-purpose sentiment lexicon. The lists are
//! process-wide statics built on first use and never mutated.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words dropped by the word tokenizer
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "if", "while", "of", "to", "in", "on", "for",
        "with", "as", "is", "are", "was", "were", "be", "by", "at", "from", "that", "this",
        "it", "has", "have",
    ]
    .into_iter()
    .collect()
});

pub static POSITIVE_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "great", "excellent", "amazing", "love", "happy", "superb", "fantastic", "positive",
        "success", "win", "delight", "enjoy", "progress", "growth",
    ]
    .into_iter()
    .collect()
});

pub static NEGATIVE_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bad", "terrible", "awful", "hate", "sad", "horrible", "negative", "fail", "loss",
        "problem", "issue", "down", "crash", "delay",
    ]
    .into_iter()
    .collect()
});

/// Source of positive/negative term membership for sentiment scoring
pub trait SentimentLexicon {
    fn is_positive(&self, term: &str) -> bool;

    fn is_negative(&self, term: &str) -> bool;
}

/// The built-in lexicon backed by [`POSITIVE_TERMS`] and [`NEGATIVE_TERMS`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralLexicon;

impl SentimentLexicon for GeneralLexicon {
    fn is_positive(&self, term: &str) -> bool {
        POSITIVE_TERMS.contains(term)
    }

    fn is_negative(&self, term: &str) -> bool {
        NEGATIVE_TERMS.contains(term)
    }
}

/// A caller-supplied lexicon, e.g. for a domain vocabulary
#[derive(Debug, Clone, Default)]
pub struct CustomLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl CustomLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a copy of the built-in term sets
    pub fn extending_general() -> Self {
        Self {
            positive: POSITIVE_TERMS.iter().map(|s| s.to_string()).collect(),
            negative: NEGATIVE_TERMS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add a word; a non-negative polarity files it as positive
    pub fn add_word(&mut self, word: &str, polarity: f64) {
        let word_lower = word.to_lowercase();
        if polarity >= 0.0 {
            self.negative.remove(&word_lower);
            self.positive.insert(word_lower);
        } else {
            self.positive.remove(&word_lower);
            self.negative.insert(word_lower);
        }
    }

    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.add_word(word, polarity);
        self
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SentimentLexicon for CustomLexicon {
    fn is_positive(&self, term: &str) -> bool {
        self.positive.contains(term)
    }

    fn is_negative(&self, term: &str) -> bool {
        self.negative.contains(term)
    }
}
