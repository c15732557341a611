use serde::{Deserialize, Serialize};

use crate::errors::SummarizationError;

pub const DEFAULT_MAX_LENGTH: u32 = 150;
pub const DEFAULT_MIN_LENGTH: u32 = 100;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 0.9;

/// Generation parameters for a single request.
///
/// The handler trusts these values as given; `validate` is for the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummarizationConfig {
    #[serde(alias = "max_length")]
    pub max_length: u32,
    #[serde(alias = "min_length")]
    pub min_length: u32,
    #[serde(alias = "use_sampling")]
    pub use_sampling: bool,
    pub temperature: f64,
    #[serde(alias = "top_p")]
    pub top_p: f64,
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            use_sampling: false,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

impl SummarizationConfig {
    /// Checks the invariants a form is expected to enforce before calling the handler.
    ///
    /// # Errors
    ///
    /// Returns a user-facing reason for the first violated constraint.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_length == 0 {
            return Err("Minimum length must be a positive integer".to_string());
        }
        if self.max_length == 0 {
            return Err("Maximum length must be a positive integer".to_string());
        }
        if self.min_length > self.max_length {
            return Err(format!(
                "Minimum length ({}) cannot exceed maximum length ({})",
                self.min_length, self.max_length
            ));
        }
        if self.use_sampling {
            if !(0.0..=1.0).contains(&self.temperature) {
                return Err(format!(
                    "Temperature must be between 0 and 1 (got {})",
                    self.temperature
                ));
            }
            if !(0.0..=1.0).contains(&self.top_p) {
                return Err(format!("Top-p must be between 0 and 1 (got {})", self.top_p));
            }
        }
        Ok(())
    }
}

/// Body of a summarize request: the text plus optional overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub config: SummarizationConfig,
}

/// Body of a download request: the summary already shown to the user.
///
/// A full `SummarizationResult` is accepted too; only `summaryText` is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDownload {
    #[serde(default, alias = "summary_text")]
    pub summary_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationResult {
    pub summary_text: String,
    pub original_word_count: usize,
    pub summary_word_count: usize,
    pub compression_ratio_percent: f64,
}

/// Wire shape of a summarize outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    Success(SummarizationResult),
    Failure { error: String },
}

impl From<Result<SummarizationResult, SummarizationError>> for SummaryResponse {
    fn from(outcome: Result<SummarizationResult, SummarizationError>) -> Self {
        match outcome {
            Ok(result) => SummaryResponse::Success(result),
            Err(e) => SummaryResponse::Failure { error: e.message() },
        }
    }
}
