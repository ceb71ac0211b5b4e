//! Sentence and word tokenization
//!
//! Sentences end at whitespace that follows `.`, `!` or `?`. Words are
//! lowercased runs of ASCII letters and apostrophes with stop-words and
//! short tokens removed.

use super::lexicon::STOP_WORDS;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z']+").unwrap());

/// Word counts in order of first occurrence
pub type FrequencyTable = IndexMap<String, usize>;

/// Text tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Shortest word kept
    min_word_length: usize,
    /// Drop words from [`STOP_WORDS`]
    remove_stop_words: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            min_word_length: 3,
            remove_stop_words: true,
        }
    }

    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    pub fn remove_stop_words(mut self, remove: bool) -> Self {
        self.remove_stop_words = remove;
        self
    }

    /// Split text into trimmed, non-empty sentences.
    ///
    /// The terminal punctuation stays with its sentence. Abbreviations are
    /// not recognised, so "Dr. Who" yields two sentences.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let text = text.trim();
        let mut pieces = Vec::new();
        let mut start = 0;

        for boundary in SENTENCE_BOUNDARY_REGEX.find_iter(text) {
            // the punctuation mark is a single byte
            pieces.push(&text[start..boundary.start() + 1]);
            start = boundary.end();
        }
        pieces.push(&text[start..]);

        pieces
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Lowercased word tokens in document order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD_REGEX
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| word.len() >= self.min_word_length)
            .filter(|word| !(self.remove_stop_words && STOP_WORDS.contains(*word)))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Count tokens, keeping the order in which each first appeared
pub fn frequencies<S: AsRef<str>>(tokens: &[S]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for token in tokens {
        *table.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }
    table
}

/// Divide every count by the largest one (at least 1), giving values in (0, 1]
pub fn normalized_frequencies(table: &FrequencyTable) -> IndexMap<String, f64> {
    let max_count = table.values().copied().max().unwrap_or(0).max(1) as f64;
    table
        .iter()
        .map(|(word, &count)| (word.clone(), count as f64 / max_count))
        .collect()
}
