use thiserror::Error;

/// Plumbing errors raised while talking to configuration, HTTP and the model.
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Summarization model failed: {0}")]
    ModelError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(error: serde_json::Error) -> Self {
        SummarizerError::ParseError(error.to_string())
    }
}

/// Error half of the summarization contract. Always returned as data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizationError {
    #[error("Input text must contain at least {required} words (found {found}).")]
    Validation { required: usize, found: usize },

    #[error("An error occurred: {0}")]
    Capability(String),
}

impl SummarizationError {
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, SummarizationError::Validation { .. })
    }
}

impl From<SummarizerError> for SummarizationError {
    fn from(error: SummarizerError) -> Self {
        SummarizationError::Capability(error.to_string())
    }
}
