//! TF-IDF document ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::idf::IdfTable;
use crate::query::Query;

/// One corpus file as the ranker sees it: its name and its normalized
/// token sequence.
#[derive(Debug, Clone)]
pub struct TokenizedFile {
    /// Document identifier, typically the file name inside the corpus
    /// directory.
    pub name: String,
    /// Normalized tokens of the full file contents, in order.
    pub tokens: Vec<String>,
}

impl TokenizedFile {
    pub fn new(name: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }
}

/// Ranks `files` against `query` by TF-IDF and returns the names of the
/// top `n`, most relevant first.
///
/// A file's score is `Σ count(word in file) × idf(word)` over the query
/// words; a word missing from `idfs` contributes 0. The sort is stable
/// and descending, so files with equal scores keep their relative input
/// order. The result has length `min(n, files.len())`.
pub fn top_files(query: &Query, files: &[TokenizedFile], idfs: &IdfTable, n: usize) -> Vec<String> {
    let mut ranked: Vec<(&TokenizedFile, f64)> = files
        .iter()
        .map(|file| (file, tf_idf_score(query, file, idfs)))
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(n)
        .map(|(file, _)| file.name.clone())
        .collect()
}

/// Sum of term-frequency × IDF over the query words.
fn tf_idf_score(query: &Query, file: &TokenizedFile, idfs: &IdfTable) -> f64 {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in &file.tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    query
        .iter()
        .map(|word| counts.get(word).copied().unwrap_or(0) as f64 * idfs.get(word))
        .sum()
}
