//! Query representation.

use std::collections::BTreeSet;

/// A query as the ranking core sees it: a set of distinct normalized
/// words. Duplicates collapse and input order is irrelevant.
///
/// Backed by a `BTreeSet` so iteration order is fixed by the word set
/// itself; score accumulation over query words then sums in the same
/// order on every run, keeping floating-point results reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    words: BTreeSet<String>,
}

impl Query {
    /// Builds a query from already-normalized words, collapsing duplicates.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Iterates over the distinct query words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if tokenization left nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
