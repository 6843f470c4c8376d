//! Word tokenization with Unicode support.
//!
//! Processing steps:
//! 1. Split on Unicode word boundaries
//! 2. Lowercase and strip non-alphanumeric characters (hyphens survive)
//! 3. Remove English stopwords
//!
//! Token order is preserved; downstream ranking relies on counts and
//! membership only, but the ordered sequence keeps this module reusable
//! for anything that does care about position.

use std::collections::HashSet;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Common English stopwords, filtered out of every token sequence.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "me", "more", "most", "my", "myself",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your", "yours",
    "yourself", "yourselves",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Tokenizes raw text into an ordered list of normalized word tokens.
///
/// Every alphanumeric word survives, including single characters and
/// digits; only stopwords and tokens that normalize to the empty string
/// are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let stop = stop_words();

    text.unicode_words()
        .map(normalize_token)
        .filter(|token| !token.is_empty() && !stop.contains(token.as_str()))
        .collect()
}

/// Lowercases a token and strips everything that is not alphanumeric or
/// a hyphen.
fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_lowercase()
}
