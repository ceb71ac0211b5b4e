//! Lexicon-based sentiment scoring
//!
//! Counts positive and negative lexicon hits and converts them into ratios
//! against a total that also includes a quarter weight per token, so long
//! neutral texts pull the polarity toward zero.

use super::lexicon::{GeneralLexicon, SentimentLexicon};
use super::tokenizer::{frequencies, FrequencyTable, Tokenizer};
use crate::utils::round_to;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weight of every token in the ratio denominator
const TOKEN_WEIGHT: f64 = 0.25;
/// Polarity beyond ±this picks a non-neutral label
const LABEL_THRESHOLD: f64 = 0.1;
const TOP_TERMS_LIMIT: usize = 5;

/// Sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > LABEL_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < -LABEL_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// Result of sentiment analysis; scores rounded to 4 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub label: SentimentLabel,
    /// `positive_score - negative_score`
    pub polarity: f64,
    pub positive_score: f64,
    pub negative_score: f64,
    pub neutral_score: f64,
    /// Most frequent positive terms, ties in order of first occurrence
    pub top_positive_terms: Vec<String>,
    pub top_negative_terms: Vec<String>,
}

/// Sentiment analyzer
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer<L = GeneralLexicon> {
    tokenizer: Tokenizer,
    lexicon: L,
}

impl SentimentAnalyzer<GeneralLexicon> {
    pub fn new() -> Self {
        Self::with_lexicon(GeneralLexicon)
    }
}

impl Default for SentimentAnalyzer<GeneralLexicon> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SentimentLexicon> SentimentAnalyzer<L> {
    /// Use a custom lexicon
    pub fn with_lexicon(lexicon: L) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lexicon,
        }
    }

    pub fn analyze(&self, text: &str) -> SentimentReport {
        let tokens = self.tokenizer.tokenize(text);
        let occurrences = frequencies(&tokens);

        let mut positive = 0usize;
        let mut negative = 0usize;
        for (token, &count) in &occurrences {
            if self.lexicon.is_positive(token) {
                positive += count;
            }
            if self.lexicon.is_negative(token) {
                negative += count;
            }
        }
        debug!(tokens = tokens.len(), positive, negative, "scored sentiment");

        let total = positive as f64 + negative as f64 + tokens.len() as f64 * TOKEN_WEIGHT;
        let (positive_ratio, negative_ratio) = if total > 0.0 {
            (positive as f64 / total, negative as f64 / total)
        } else {
            (0.0, 0.0)
        };
        let neutral_ratio = (1.0 - (positive_ratio + negative_ratio)).max(0.0);
        let polarity = positive_ratio - negative_ratio;

        SentimentReport {
            label: SentimentLabel::from_polarity(polarity),
            polarity: round_to(polarity, 4),
            positive_score: round_to(positive_ratio, 4),
            negative_score: round_to(negative_ratio, 4),
            neutral_score: round_to(neutral_ratio, 4),
            top_positive_terms: top_terms(&occurrences, |t| self.lexicon.is_positive(t)),
            top_negative_terms: top_terms(&occurrences, |t| self.lexicon.is_negative(t)),
        }
    }
}

fn top_terms(occurrences: &FrequencyTable, matches: impl Fn(&str) -> bool) -> Vec<String> {
    let mut hits: Vec<(&String, usize)> = occurrences
        .iter()
        .filter(|(term, _)| matches(term.as_str()))
        .map(|(term, &count)| (term, count))
        .collect();
    hits.sort_by(|a, b| b.1.cmp(&a.1));
    hits.into_iter()
        .take(TOP_TERMS_LIMIT)
        .map(|(term, _)| term.clone())
        .collect()
}

/// Score text with the built-in lexicon
pub fn analyse_sentiment(text: &str) -> SentimentReport {
    SentimentAnalyzer::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::lexicon::CustomLexicon;

    #[test]
    fn test_positive_sentiment() {
        let report = analyse_sentiment("Great progress and amazing growth, we love it");

        // 5 hits over 5 + 0.25 * 5 tokens
        assert_eq!(report.label, SentimentLabel::Positive);
        assert_eq!(report.positive_score, 0.8);
        assert_eq!(report.negative_score, 0.0);
        assert_eq!(report.neutral_score, 0.2);
        assert_eq!(
            report.top_positive_terms,
            vec!["great", "progress", "amazing", "growth", "love"]
        );
    }

    #[test]
    fn test_negative_sentiment() {
        let report = analyse_sentiment("Terrible delay, another delay and a crash");

        assert_eq!(report.label, SentimentLabel::Negative);
        assert!(report.polarity < -0.1);
        assert_eq!(report.top_negative_terms, vec!["delay", "terrible", "crash"]);
    }

    #[test]
    fn test_neutral_and_empty_text() {
        let neutral = analyse_sentiment("The meeting covered quarterly planning topics");
        assert_eq!(neutral.label, SentimentLabel::Neutral);
        assert_eq!(neutral.neutral_score, 1.0);

        let empty = analyse_sentiment("a an");
        assert_eq!(empty.polarity, 0.0);
        assert_eq!(empty.positive_score, 0.0);
        assert_eq!(empty.neutral_score, 1.0);
    }

    #[test]
    fn test_top_terms_are_capped() {
        let report = analyse_sentiment(
            "great excellent amazing love happy superb fantastic success",
        );
        assert_eq!(report.top_positive_terms.len(), TOP_TERMS_LIMIT);
        assert_eq!(report.top_positive_terms[0], "great");
    }

    #[test]
    fn test_custom_lexicon() {
        let analyzer =
            SentimentAnalyzer::with_lexicon(CustomLexicon::new().with_word("bullish", 1.0));
        let report = analyzer.analyze("bullish bullish market");

        assert_eq!(report.label, SentimentLabel::Positive);
        assert_eq!(report.top_positive_terms, vec!["bullish"]);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }
}
