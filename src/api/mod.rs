//! Request boundary
//!
//! Transport-neutral request types with their preconditions, and a service
//! that turns a validated request into a JSON response body.

mod requests;
mod service;

pub use requests::{
    ArticleInsightsRequest, CorrelateRequest, FeatureSummaryRequest, InsightsRequest,
    KeywordsRequest, NormalizeRequest, RegressionRequest, SentimentRequest, SummarizeRequest,
    TfIdfRequest, Validate,
};
pub use service::{AnalyticsService, Operation};
