//! Summary generation and delivery

pub mod deliver;
pub mod summarize;

pub use summarize::SummaryRequestHandler;
