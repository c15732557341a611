#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tldr_text::SummarizerError;
use tldr_text::SummaryRequestHandler;
use tldr_text::ai::{CapabilityRequest, ModelHandle, ModelLoader, SummarizationCapability};

/// Capability that records every request and answers with a fixed reply.
pub struct StubCapability {
    reply: Result<String, String>,
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<CapabilityRequest>>,
}

impl StubCapability {
    pub fn replying(summary: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(summary.to_string()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CapabilityRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SummarizationCapability for StubCapability {
    async fn summarize(&self, request: &CapabilityRequest) -> Result<String, SummarizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(SummarizerError::ModelError)
    }
}

/// Loader that counts loads and can fail a configurable number of times first.
pub struct StubLoader {
    capability: Arc<StubCapability>,
    failures_left: AtomicUsize,
    pub loads: AtomicUsize,
}

impl StubLoader {
    pub fn new(capability: Arc<StubCapability>) -> Arc<Self> {
        Self::failing_first(capability, 0)
    }

    pub fn failing_first(capability: Arc<StubCapability>, failures: usize) -> Arc<Self> {
        Arc::new(Self {
            capability,
            failures_left: AtomicUsize::new(failures),
            loads: AtomicUsize::new(0),
        })
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelLoader for StubLoader {
    fn model_name(&self) -> &str {
        "stub/summarizer"
    }

    async fn load(&self) -> Result<ModelHandle, SummarizerError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(SummarizerError::ModelError("out of memory".to_string()));
        }

        Ok(ModelHandle::new("stub/summarizer", self.capability.clone()))
    }
}

pub fn handler_with(capability: Arc<StubCapability>) -> (SummaryRequestHandler, Arc<StubLoader>) {
    let loader = StubLoader::new(capability);
    (SummaryRequestHandler::new(loader.clone()), loader)
}
