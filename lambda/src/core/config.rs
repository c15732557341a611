use std::env;
use std::time::Duration;

use crate::errors::SummarizerError;

pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_name: String,
    pub inference_endpoint: String,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
    pub wait_for_model: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL.to_string(),
            inference_endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            wait_for_model: true,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` when a numeric or boolean variable cannot be parsed.
    pub fn from_env() -> Result<Self, SummarizerError> {
        let defaults = Self::default();

        let timeout_secs = match env::var("SUMMARIZER_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                SummarizerError::ConfigError(format!("SUMMARIZER_TIMEOUT_SECS: {e}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let wait_for_model = match env::var("SUMMARIZER_WAIT_FOR_MODEL") {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                SummarizerError::ConfigError(format!(
                    "SUMMARIZER_WAIT_FOR_MODEL: expected true/false, got '{raw}'"
                ))
            })?,
            Err(_) => defaults.wait_for_model,
        };

        Ok(Self {
            model_name: env::var("SUMMARIZER_MODEL").unwrap_or(defaults.model_name),
            inference_endpoint: env::var("SUMMARIZER_ENDPOINT")
                .unwrap_or(defaults.inference_endpoint),
            api_token: env::var("HF_API_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            request_timeout: Duration::from_secs(timeout_secs),
            wait_for_model,
        })
    }
}

/// Lenient boolean parsing shared by env vars and form fields.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
