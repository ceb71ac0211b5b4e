//! Text analytics engine
//!
//! Includes:
//! - Sentence splitting and word tokenization with stop-word filtering
//! - Extractive summarization
//! - Lexicon-based sentiment analysis
//! - Keyword extraction
//! - N-gram TF-IDF over a corpus
//! - Composite insights combining the above

mod insights;
mod keywords;
mod lexicon;
mod sentiment;
mod summarizer;
mod tfidf;
mod tokenizer;

pub use insights::{
    article_insights, build_text_insights, ArticleInsight, ArticleInsights, ArticleOptions,
    TextInsights,
};
pub use keywords::{extract_keywords, KeywordExtractor, KeywordReport};
pub use lexicon::{
    CustomLexicon, GeneralLexicon, SentimentLexicon, NEGATIVE_TERMS, POSITIVE_TERMS, STOP_WORDS,
};
pub use sentiment::{analyse_sentiment, SentimentAnalyzer, SentimentLabel, SentimentReport};
pub use summarizer::{summarize_text, Summarizer, Summary};
pub use tfidf::{compute_tf_idf, generate_ngrams, NgramTfIdf, TfIdfReport, MAX_NGRAM};
pub use tokenizer::{frequencies, normalized_frequencies, FrequencyTable, Tokenizer};
