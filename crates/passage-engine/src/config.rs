//! Match-count configuration from environment variables.

use std::env;
use serde::{Deserialize, Serialize};

/// How many files and sentences the pipeline surfaces per query.
///
/// Passed explicitly into [`crate::QueryEngine`] at construction so
/// tests can vary the counts without touching process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of top-ranked files to draw sentences from.
    pub file_matches: usize,
    /// Number of top-ranked sentences to print as the answer.
    pub sentence_matches: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from environment variables.
    ///
    /// Optional:
    /// - `PASSAGE_FILE_MATCHES`: top-file count (default: 1)
    /// - `PASSAGE_SENTENCE_MATCHES`: top-sentence count (default: 1)
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let file_matches = env::var("PASSAGE_FILE_MATCHES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.file_matches);

        let sentence_matches = env::var("PASSAGE_SENTENCE_MATCHES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.sentence_matches);

        Self {
            file_matches,
            sentence_matches,
        }
    }
}
