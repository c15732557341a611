use std::sync::Arc;

use once_cell::sync::OnceCell as SyncOnceCell;
use tokio::sync::OnceCell;
use tracing::{error, info, warn};

use crate::ai::client::CapabilityRequest;
use crate::ai::model::{HubModelLoader, ModelHandle, ModelLoader};
use crate::core::config::AppConfig;
use crate::core::models::{SummarizationConfig, SummarizationResult};
use crate::errors::{SummarizationError, SummarizerError};
use crate::utils::text::{compression_ratio_percent, word_count};

static GLOBAL_HANDLER: SyncOnceCell<SummaryRequestHandler> = SyncOnceCell::new();

/// Mediates between user text plus parameters and the summarization model.
///
/// The model is loaded on the first request that passes validation and is
/// then shared by every later call.
pub struct SummaryRequestHandler {
    loader: Arc<dyn ModelLoader>,
    model: OnceCell<ModelHandle>,
}

impl SummaryRequestHandler {
    #[must_use]
    pub fn new(loader: Arc<dyn ModelLoader>) -> Self {
        Self {
            loader,
            model: OnceCell::new(),
        }
    }

    /// Process-wide handler backed by the hosted model from `config`.
    ///
    /// Only the first caller's config is used.
    pub fn global(config: &AppConfig) -> &'static SummaryRequestHandler {
        GLOBAL_HANDLER.get_or_init(|| {
            info!(model = %config.model_name, "Initializing process-wide summary handler");
            SummaryRequestHandler::new(Arc::new(HubModelLoader::new(config.clone())))
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.loader.model_name()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    async fn model(&self) -> Result<&ModelHandle, SummarizerError> {
        self.model
            .get_or_try_init(|| async {
                info!(model = %self.loader.model_name(), "Loading summarization model");
                self.loader.load().await
            })
            .await
    }

    /// Summarizes `text` with `config`.
    ///
    /// # Errors
    ///
    /// `Validation` when the text has fewer than `config.min_length` words,
    /// `Capability` when the model cannot be loaded or the call fails.
    #[tracing::instrument(level = "info", skip(self, text), fields(input_chars = text.chars().count()))]
    pub async fn summarize(
        &self,
        text: &str,
        config: &SummarizationConfig,
    ) -> Result<SummarizationResult, SummarizationError> {
        let original_word_count = word_count(text);
        let required = config.min_length as usize;

        if original_word_count < required {
            warn!(
                found = original_word_count,
                required, "Rejecting input below the minimum word count"
            );
            return Err(SummarizationError::Validation {
                required,
                found: original_word_count,
            });
        }

        let model = self.model().await.map_err(|e| {
            error!("Failed to load summarization model: {}", e);
            SummarizationError::from(e)
        })?;

        let request = CapabilityRequest {
            text: text.to_string(),
            max_length: config.max_length,
            min_length: config.min_length,
            do_sample: config.use_sampling,
            temperature: config.use_sampling.then_some(config.temperature),
            top_p: config.use_sampling.then_some(config.top_p),
        };

        let summary_text = model.capability().summarize(&request).await.map_err(|e| {
            error!(model = %model.model_name(), "Summarization failed: {}", e);
            SummarizationError::from(e)
        })?;

        let summary_word_count = word_count(&summary_text);
        let result = SummarizationResult {
            compression_ratio_percent: compression_ratio_percent(
                original_word_count,
                summary_word_count,
            ),
            summary_text,
            original_word_count,
            summary_word_count,
        };

        info!(
            original_words = result.original_word_count,
            summary_words = result.summary_word_count,
            compression = result.compression_ratio_percent,
            "Summary generated"
        );

        Ok(result)
    }
}
