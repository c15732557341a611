/// Counts whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Percentage reduction in word count from `original` to `summary`.
///
/// Negative when the summary is longer than the input. Returns `0.0` for an
/// empty original, which only happens if the caller allowed `minLength = 0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compression_ratio_percent(original: usize, summary: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - summary as f64) / original as f64 * 100.0
}

/// True when the text has nothing but whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
