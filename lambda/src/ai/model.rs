//! Loading of the external summarization model.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use super::client::{CapabilityRequest, InferenceClient, SummarizationCapability};
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

/// A loaded summarization capability. Read-only once created.
#[derive(Clone)]
pub struct ModelHandle {
    model_name: String,
    capability: Arc<dyn SummarizationCapability>,
}

impl ModelHandle {
    #[must_use]
    pub fn new(model_name: impl Into<String>, capability: Arc<dyn SummarizationCapability>) -> Self {
        Self {
            model_name: model_name.into(),
            capability,
        }
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn capability(&self) -> &dyn SummarizationCapability {
        self.capability.as_ref()
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHandle")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

/// Performs the expensive one-time model load.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    fn model_name(&self) -> &str;

    async fn load(&self) -> Result<ModelHandle, SummarizerError>;
}

const WARM_UP_TEXT: &str =
    "The summarization service is starting up and checking that the model answers requests.";

/// Loads a hosted pipeline model described by `AppConfig`.
pub struct HubModelLoader {
    config: AppConfig,
}

impl HubModelLoader {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when the endpoint or model name do not form a valid URL.
    pub fn model_url(&self) -> Result<Url, SummarizerError> {
        let mut base = self.config.inference_endpoint.trim_end_matches('/').to_string();
        base.push('/');

        Url::parse(&base)
            .and_then(|u| u.join(self.config.model_name.trim_start_matches('/')))
            .map_err(|e| {
                SummarizerError::ConfigError(format!(
                    "invalid inference endpoint '{}': {e}",
                    self.config.inference_endpoint
                ))
            })
    }
}

#[async_trait]
impl ModelLoader for HubModelLoader {
    fn model_name(&self) -> &str {
        &self.config.model_name
    }

    async fn load(&self) -> Result<ModelHandle, SummarizerError> {
        let model_url = self.model_url()?;

        let http = Client::builder()
            .timeout(self.config.request_timeout)
            .build()?;

        let client = InferenceClient::new(
            http,
            model_url.to_string(),
            self.config.api_token.clone(),
            self.config.wait_for_model,
        );

        // The model only counts as loaded once the endpoint has served a summary.
        client.summarize(&warm_up_request()).await.map_err(|e| {
            warn!(model = %self.config.model_name, url = %model_url, "Model warm-up failed: {}", e);
            SummarizerError::ModelError(format!(
                "model {} did not load: {e}",
                self.config.model_name
            ))
        })?;

        info!(
            model = %self.config.model_name,
            url = %model_url,
            authenticated = self.config.api_token.is_some(),
            "Loaded summarization model"
        );

        Ok(ModelHandle::new(
            self.config.model_name.clone(),
            Arc::new(client),
        ))
    }
}

fn warm_up_request() -> CapabilityRequest {
    CapabilityRequest {
        text: WARM_UP_TEXT.to_string(),
        max_length: 16,
        min_length: 1,
        do_sample: false,
        temperature: None,
        top_p: None,
    }
}
