//! TF-IDF over n-grams
//!
//! Documents are tokenized independently and expanded into every n-gram
//! order from 1 up to the requested maximum. Term frequency is relative to
//! the document's n-gram count; IDF is smoothed so it is always positive:
//!
//! `idf = ln((N + 1) / (df + 1)) + 1`

use super::tokenizer::{frequencies, Tokenizer};
use crate::utils::by_score_desc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::debug;

/// Largest supported n-gram order
pub const MAX_NGRAM: usize = 3;

/// Corpus vocabulary and the ranked terms of every document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TfIdfReport {
    /// All distinct n-grams of the corpus, sorted
    pub vocabulary: Vec<String>,
    /// Top terms per document, aligned with the input order
    pub document_top_terms: Vec<Vec<String>>,
}

/// All contiguous n-grams of orders `1..=max_n`, joined by single spaces.
///
/// `max_n` is clamped into `1..=MAX_NGRAM`.
pub fn generate_ngrams<S: AsRef<str>>(tokens: &[S], max_n: usize) -> Vec<String> {
    let capped = max_n.clamp(1, MAX_NGRAM);
    let mut ngrams = Vec::new();
    for n in 1..=capped {
        for window in tokens.windows(n) {
            let parts: Vec<&str> = window.iter().map(|t| t.as_ref()).collect();
            ngrams.push(parts.join(" "));
        }
    }
    ngrams
}

/// A TF-IDF model fitted on one corpus
#[derive(Debug, Clone)]
pub struct NgramTfIdf {
    ngram: usize,
    tokenizer: Tokenizer,
    /// Number of documents containing each term
    doc_freq: HashMap<String, usize>,
    /// Per-document scores, in order of first occurrence within the document
    scores: Vec<IndexMap<String, f64>>,
    vocabulary: BTreeSet<String>,
}

impl NgramTfIdf {
    pub fn new(ngram: usize) -> Self {
        Self {
            ngram: ngram.clamp(1, MAX_NGRAM),
            tokenizer: Tokenizer::new(),
            doc_freq: HashMap::new(),
            scores: Vec::new(),
            vocabulary: BTreeSet::new(),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn ngram(&self) -> usize {
        self.ngram
    }

    /// Fit document frequencies and score every document of the corpus.
    pub fn fit<S: AsRef<str>>(mut self, documents: &[S]) -> Self {
        let doc_ngrams: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| generate_ngrams(&self.tokenizer.tokenize(doc.as_ref()), self.ngram))
            .collect();

        self.doc_freq.clear();
        self.vocabulary.clear();
        for ngrams in &doc_ngrams {
            let unique: HashSet<&String> = ngrams.iter().collect();
            for term in unique {
                *self.doc_freq.entry(term.clone()).or_insert(0) += 1;
                self.vocabulary.insert(term.clone());
            }
        }

        let n_docs = documents.len();
        let scores: Vec<IndexMap<String, f64>> = doc_ngrams
            .iter()
            .map(|ngrams| {
                let total = ngrams.len() as f64;
                frequencies(ngrams)
                    .into_iter()
                    .map(|(term, count)| {
                        let tf = count as f64 / total;
                        let idf = self.idf_for(&term, n_docs);
                        (term, tf * idf)
                    })
                    .collect()
            })
            .collect();
        self.scores = scores;
        debug!(
            documents = n_docs,
            vocabulary = self.vocabulary.len(),
            ngram = self.ngram,
            "fitted tf-idf"
        );

        self
    }

    fn idf_for(&self, term: &str, n_docs: usize) -> f64 {
        let df = self.doc_freq.get(term).copied().unwrap_or(1);
        ((n_docs as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0
    }

    /// Smoothed IDF of a term against the fitted corpus
    pub fn idf(&self, term: &str) -> f64 {
        self.idf_for(term, self.scores.len())
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &String> {
        self.vocabulary.iter()
    }

    pub fn n_documents(&self) -> usize {
        self.scores.len()
    }

    /// TF-IDF scores of one document, or `None` past the end of the corpus
    pub fn document_scores(&self, doc_idx: usize) -> Option<&IndexMap<String, f64>> {
        self.scores.get(doc_idx)
    }

    /// The `k` best terms of a document; ties keep first-occurrence order.
    pub fn top_terms(&self, doc_idx: usize, k: usize) -> Vec<(String, f64)> {
        let Some(scores) = self.scores.get(doc_idx) else {
            return Vec::new();
        };
        let mut ranked: Vec<(String, f64)> =
            scores.iter().map(|(t, &s)| (t.clone(), s)).collect();
        ranked.sort_by(|a, b| by_score_desc(a.1, b.1));
        ranked.truncate(k);
        ranked
    }

    pub fn report(&self, top_k: usize) -> TfIdfReport {
        TfIdfReport {
            vocabulary: self.vocabulary.iter().cloned().collect(),
            document_top_terms: (0..self.scores.len())
                .map(|idx| {
                    self.top_terms(idx, top_k)
                        .into_iter()
                        .map(|(term, _)| term)
                        .collect()
                })
                .collect(),
        }
    }
}

/// Rank each document's n-grams by TF-IDF over the given corpus.
pub fn compute_tf_idf<S: AsRef<str>>(documents: &[S], top_k: usize, ngram: usize) -> TfIdfReport {
    NgramTfIdf::new(ngram).fit(documents).report(top_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ngrams() {
        let tokens = ["quick", "brown", "fox"];

        assert_eq!(generate_ngrams(&tokens, 1), vec!["quick", "brown", "fox"]);
        assert_eq!(
            generate_ngrams(&tokens, 2),
            vec!["quick", "brown", "fox", "quick brown", "brown fox"]
        );
        assert_eq!(generate_ngrams(&tokens, 9).len(), 6);
        assert_eq!(generate_ngrams(&tokens, 0).len(), 3);
    }

    #[test]
    fn test_unique_terms_rank_first() {
        let report = compute_tf_idf(&["the cat sat", "the dog ran"], 2, 1);

        assert_eq!(report.vocabulary, vec!["cat", "dog", "ran", "sat"]);
        assert_eq!(report.document_top_terms[0], vec!["cat", "sat"]);
        assert_eq!(report.document_top_terms[1], vec!["dog", "ran"]);
    }

    #[test]
    fn test_shared_terms_score_lower() {
        let docs = [
            "market rally continues strongly",
            "market crash fears grow",
            "market steady today",
        ];
        let model = NgramTfIdf::new(1).fit(&docs);

        assert!(model.idf("market") < model.idf("rally"));
        assert!((model.idf("market") - 1.0).abs() < 1e-12);
        let top = model.top_terms(0, 4);
        assert_eq!(top.last().unwrap().0, "market");
    }

    #[test]
    fn test_bigrams_included() {
        let report = compute_tf_idf(&["solar panel prices", "wind turbine prices"], 10, 2);

        assert!(report.vocabulary.contains(&"solar panel".to_string()));
        assert!(report.vocabulary.contains(&"turbine prices".to_string()));
        assert_eq!(report.document_top_terms[0].len(), 5);
    }

    #[test]
    fn test_document_without_terms() {
        let report = compute_tf_idf(&["it is a", "valid words here"], 5, 1);

        assert!(report.document_top_terms[0].is_empty());
        assert_eq!(report.document_top_terms[1].len(), 3);
    }
}
