//! Two-signal sentence ranking.
//!
//! Sentences are ranked by a composite key, both parts descending:
//! 1. `sum_idf`: summed IDF of the distinct query words present
//! 2. `density`: distinct query words present ÷ sentence token count
//!
//! `sum_idf` is the primary signal; density only breaks ties between
//! sentences carrying equally informative query words. Equal pairs fall
//! back to stable input order, same as file ranking.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::idf::IdfTable;
use crate::query::Query;

/// One candidate sentence: the verbatim text to surface and its
/// normalized token sequence.
///
/// The token sequence must be non-empty; callers filter sentences that
/// tokenize to nothing before registering them as ranking units.
#[derive(Debug, Clone)]
pub struct TokenizedSentence {
    /// Original sentence text, casing and punctuation intact.
    pub text: String,
    /// Normalized tokens of the sentence. Never empty.
    pub tokens: Vec<String>,
}

impl TokenizedSentence {
    pub fn new(text: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }
}

/// Ranks `sentences` against `query` and returns the texts of the top
/// `n`, most relevant first.
///
/// The result has length `min(n, sentences.len())`.
///
/// # Panics
///
/// Panics if any sentence has an empty token sequence; that is a broken
/// caller contract, not a rankable input.
pub fn top_sentences(
    query: &Query,
    sentences: &[TokenizedSentence],
    idfs: &IdfTable,
    n: usize,
) -> Vec<String> {
    let mut ranked: Vec<(&TokenizedSentence, f64, f64)> = sentences
        .iter()
        .map(|sentence| {
            assert!(
                !sentence.tokens.is_empty(),
                "sentence with empty token sequence registered for ranking: {:?}",
                sentence.text
            );
            let (sum_idf, density) = sentence_score(query, sentence, idfs);
            (sentence, sum_idf, density)
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal))
    });

    ranked
        .into_iter()
        .take(n)
        .map(|(sentence, _, _)| sentence.text.clone())
        .collect()
}

/// Computes (sum_idf, query-term density) for one sentence.
fn sentence_score(query: &Query, sentence: &TokenizedSentence, idfs: &IdfTable) -> (f64, f64) {
    let present: HashSet<&str> = sentence.tokens.iter().map(String::as_str).collect();

    let mut sum_idf = 0.0;
    let mut word_count = 0usize;
    for word in query.iter() {
        if present.contains(word) {
            sum_idf += idfs.get(word);
            word_count += 1;
        }
    }

    let density = word_count as f64 / sentence.tokens.len() as f64;
    (sum_idf, density)
}
