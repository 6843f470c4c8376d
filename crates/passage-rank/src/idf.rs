//! Inverse document frequency statistics.
//!
//! IDF measures how informative a word is across a collection of units:
//! `idf(word) = ln(N / df(word))` where `N` is the number of units and
//! `df(word)` is the number of units containing the word at least once.
//! A word present in every unit scores `ln(1) = 0`; rarer words score
//! higher.

use std::collections::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

/// Precomputed IDF scores for one collection of units.
///
/// The table contains exactly the words occurring in at least one unit
/// of the collection it was built from. Lookups for any other word
/// return 0.0 rather than failing; consumers treat "never seen" as
/// "carries no information".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdfTable {
    scores: HashMap<String, f64>,
}

impl IdfTable {
    /// Builds the table from an iterator of token sequences, one per unit.
    ///
    /// Each distinct word counts once per unit regardless of how many
    /// times it repeats there. The result depends only on the multiset of
    /// units, not on their iteration order. No units yields an empty
    /// table.
    pub fn from_units<'a, I>(units: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut unit_count: usize = 0;
        let mut doc_freq: HashMap<&'a str, usize> = HashMap::new();

        for tokens in units {
            unit_count += 1;
            let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for word in distinct {
                *doc_freq.entry(word).or_insert(0) += 1;
            }
        }

        let scores = doc_freq
            .into_iter()
            .map(|(word, df)| (word.to_owned(), (unit_count as f64 / df as f64).ln()))
            .collect();

        Self { scores }
    }

    /// Returns the IDF of `word`, or 0.0 for a word the collection never
    /// contained. This zero-default lookup is the contract ranking
    /// consumers rely on; absence is never an error.
    pub fn get(&self, word: &str) -> f64 {
        self.scores.get(word).copied().unwrap_or(0.0)
    }

    /// True if the table holds a score for `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    /// Iterates over all scored words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if no unit contributed any word.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
