//! Inference API client module
//!
//! Encapsulates the call to the hosted summarization pipeline.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::errors::SummarizerError;

/// Arguments of one call to the summarization capability.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRequest {
    pub text: String,
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

/// Anything that turns text into a summary string.
#[async_trait]
pub trait SummarizationCapability: Send + Sync {
    async fn summarize(&self, request: &CapabilityRequest) -> Result<String, SummarizerError>;
}

/// HTTP client for a Hugging Face style `summarization` pipeline endpoint.
pub struct InferenceClient {
    http: Client,
    model_url: String,
    api_token: Option<String>,
    wait_for_model: bool,
}

impl InferenceClient {
    #[must_use]
    pub fn new(
        http: Client,
        model_url: String,
        api_token: Option<String>,
        wait_for_model: bool,
    ) -> Self {
        Self {
            http,
            model_url,
            api_token,
            wait_for_model,
        }
    }

    #[must_use]
    pub fn model_url(&self) -> &str {
        &self.model_url
    }

    #[must_use]
    pub fn build_request_body(&self, request: &CapabilityRequest) -> Value {
        let mut parameters = json!({
            "max_length": request.max_length,
            "min_length": request.min_length,
            "do_sample": request.do_sample,
        });

        if let Some(temperature) = request.temperature {
            parameters["temperature"] = json!(temperature);
        }
        if let Some(top_p) = request.top_p {
            parameters["top_p"] = json!(top_p);
        }

        json!({
            "inputs": request.text,
            "parameters": parameters,
            "options": { "wait_for_model": self.wait_for_model }
        })
    }
}

#[async_trait]
impl SummarizationCapability for InferenceClient {
    async fn summarize(&self, request: &CapabilityRequest) -> Result<String, SummarizerError> {
        #[cfg(feature = "debug-logs")]
        info!("Inference request input:\n{}", request.text);

        info!(
            max_length = request.max_length,
            min_length = request.min_length,
            do_sample = request.do_sample,
            input_chars = request.text.chars().count(),
            "Requesting summary from {}",
            self.model_url
        );

        let mut builder = self
            .http
            .post(&self.model_url)
            .json(&self.build_request_body(request));

        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SummarizerError::HttpError(format!("Inference request failed: {e}")))?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<Value>(&body_text)
                .ok()
                .and_then(|v| error_message(&v))
                .unwrap_or(body_text);
            error!(status = status.as_u16(), "Inference endpoint returned an error");
            return Err(SummarizerError::ModelError(format!(
                "inference endpoint returned {status}: {detail}"
            )));
        }

        let body: Value = serde_json::from_str(&body_text).map_err(|e| {
            SummarizerError::ModelError(format!("Failed to parse inference response: {e}"))
        })?;

        parse_summary_response(&body)
    }
}

fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => Some(other.to_string()),
    }
}

/// Extracts the summary from a pipeline response.
///
/// Accepts `[{"summary_text": ..}]` and the bare object form some deployments return.
///
/// # Errors
///
/// Returns `ModelError` for an `{"error": ..}` body or when no summary text is present.
pub fn parse_summary_response(body: &Value) -> Result<String, SummarizerError> {
    if let Some(message) = error_message(body) {
        return Err(SummarizerError::ModelError(message));
    }

    let entry = match body {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(body),
        _ => None,
    };

    entry
        .and_then(|e| e.get("summary_text"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| SummarizerError::ModelError("No summary_text in response".to_string()))
}
