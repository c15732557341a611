pub mod text;

pub use text::{compression_ratio_percent, word_count};
