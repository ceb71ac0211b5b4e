//! CLI for the analytics engines
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- normalize --values 1,2,3,10
//! cargo run -- summarize --text "First sentence. Second one." --max-sentences 1
//! echo '{"operation": "sentiment", "text": "great news"}' | cargo run -- request
//! ```

use analytics_core::api::{
    CorrelateRequest, FeatureSummaryRequest, InsightsRequest, KeywordsRequest, NormalizeRequest,
    RegressionRequest, SentimentRequest, SummarizeRequest, TfIdfRequest,
};
use analytics_core::{AnalyticsService, Config, Error, Operation};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Config read when `--config` is not given; defaults apply if it is missing
const DEFAULT_CONFIG_PATH: &str = "analytics.toml";

#[derive(Parser)]
#[command(name = "analytics")]
#[command(author = "ML for Trading")]
#[command(version = analytics_core::VERSION)]
#[command(about = "Numerical and text analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level or filter directive (overrides the config file; RUST_LOG wins over both)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Path to a TOML config file (default: ./analytics.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Z-score, min-max and robust scaling of a series
    Normalize {
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        values: Vec<f64>,
    },

    /// Pearson, Spearman and Kendall correlations of two series
    Correlate {
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        series_a: Vec<f64>,

        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        series_b: Vec<f64>,
    },

    /// Fit a linear regression from a JSON file with `features` and `targets`
    Regression {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Per-column statistics from a JSON file with `features`
    Features {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Extractive summary of a text
    Summarize {
        #[arg(short, long)]
        text: String,

        #[arg(short, long)]
        max_sentences: Option<usize>,
    },

    /// Lexicon sentiment of a text
    Sentiment {
        #[arg(short, long)]
        text: String,
    },

    /// Top keywords of a text
    Keywords {
        #[arg(short, long)]
        text: String,

        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },

    /// N-gram TF-IDF over several documents
    Tfidf {
        /// Repeat once per document
        #[arg(short, long = "document", required = true)]
        documents: Vec<String>,

        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        #[arg(short, long)]
        ngram: Option<usize>,
    },

    /// Summary, sentiment and keywords of one text
    Insights {
        #[arg(short, long)]
        text: String,

        #[arg(short, long)]
        max_sentences: Option<usize>,

        #[arg(short, long)]
        keyword_top_k: Option<usize>,
    },

    /// Run a JSON request tagged by "operation" (from a file or stdin)
    Request {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Write the default configuration
    InitConfig {
        #[arg(default_value = "analytics.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load_or_default(DEFAULT_CONFIG_PATH),
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    setup_logging(level);

    let service = AnalyticsService::new(config);
    let result = match cli.command {
        Commands::InitConfig { path } => {
            Config::create_default(&path)?;
            info!("Wrote default configuration to {}", path.display());
            return Ok(());
        }
        Commands::Request { input } => {
            let body = match input {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            info!("Running request");
            service.handle_json(&body)
        }
        Commands::Regression { input } => read_json::<RegressionRequest>(&input)
            .and_then(|request| run(&service, Operation::Regression(request))),
        Commands::Features { input } => read_json::<FeatureSummaryRequest>(&input)
            .and_then(|request| run(&service, Operation::FeatureSummary(request))),
        command => run(&service, operation_from(command)),
    };

    report(result)
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

/// Build the request of a subcommand that takes its input from flags
fn operation_from(command: Commands) -> Operation {
    match command {
        Commands::Normalize { values } => Operation::Normalize(NormalizeRequest { values }),
        Commands::Correlate { series_a, series_b } => {
            Operation::Correlate(CorrelateRequest { series_a, series_b })
        }
        Commands::Summarize { text, max_sentences } => {
            Operation::Summarize(SummarizeRequest { text, max_sentences })
        }
        Commands::Sentiment { text } => Operation::Sentiment(SentimentRequest { text }),
        Commands::Keywords { text, top_k } => Operation::Keywords(KeywordsRequest { text, top_k }),
        Commands::Tfidf {
            documents,
            top_k,
            ngram,
        } => Operation::TfIdf(TfIdfRequest {
            documents,
            top_k,
            ngram,
        }),
        Commands::Insights {
            text,
            max_sentences,
            keyword_top_k,
        } => Operation::Insights(InsightsRequest {
            text,
            max_sentences,
            keyword_top_k,
        }),
        Commands::Regression { .. }
        | Commands::Features { .. }
        | Commands::Request { .. }
        | Commands::InitConfig { .. } => unreachable!("handled in main"),
    }
}

fn run(service: &AnalyticsService, operation: Operation) -> analytics_core::Result<Value> {
    info!("Running {}", operation.name());
    service.handle(operation)
}

/// Print the response, or exit with status 2 on a client error
fn report(result: analytics_core::Result<Value>) -> Result<()> {
    match result {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(err) if err.is_client_error() => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
        Err(err) => Err(err.into()),
    }
}

/// Read a request file; a body that does not parse is the caller's fault.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> analytics_core::Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::invalid("input", e.to_string()))
}
