//! Everything that talks to the summarization model

pub mod client;
pub mod model;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{CapabilityRequest, InferenceClient, SummarizationCapability};
pub use model::{HubModelLoader, ModelHandle, ModelLoader};
