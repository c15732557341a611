/// TLDR Text - summarizes pasted text with a pretrained summarization model.
///
/// A single Lambda serves the summarizer form: it validates the text and
/// generation parameters, forwards the request to a hosted summarization
/// pipeline (`facebook/bart-large-cnn` by default) and answers with the
/// summary plus word-count statistics, or with the summary as `summary.txt`.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda behind API Gateway for serving requests
/// - A Hugging Face style inference endpoint for the model
/// - `reqwest` for HTTP and Tokio for the async runtime
///
/// # Example
///
/// ```no_run
/// use tldr_text::core::config::AppConfig;
/// use tldr_text::core::models::SummarizationConfig;
/// use tldr_text::worker::SummaryRequestHandler;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     tldr_text::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let handler = SummaryRequestHandler::global(&config);
///
///     let article = std::fs::read_to_string("article.txt")?;
///     match handler.summarize(&article, &SummarizationConfig::default()).await {
///         Ok(result) => println!(
///             "{} ({:.1}% shorter)",
///             result.summary_text, result.compression_ratio_percent
///         ),
///         Err(e) => eprintln!("{}", e.message()),
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod utils;
pub mod worker;

pub use errors::{SummarizationError, SummarizerError};
pub use worker::SummaryRequestHandler;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log levels come from `RUST_LOG`, defaulting to `info`. Calling it more than
/// once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// tldr_text::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
