//! Sentence segmentation.
//!
//! Splits one line or paragraph of raw text into sentence substrings
//! using Unicode sentence boundaries (UAX #29). The substrings are
//! returned verbatim apart from trimming surrounding whitespace, so the
//! caller can display them exactly as they appeared in the source.

use unicode_segmentation::UnicodeSegmentation;

/// Segments `text` into trimmed, non-empty sentence substrings, in order.
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
