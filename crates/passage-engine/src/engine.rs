//! Query orchestration.
//!
//! ## Pipeline
//!
//! 1. At construction: tokenize every corpus file and compute the
//!    file-level IDF table, once.
//! 2. Per query: rank files by TF-IDF, take the configured top files.
//! 3. Split each top file into lines, segment lines into sentences,
//!    tokenize each sentence, and drop sentences that tokenize to
//!    nothing (headings of stopwords, bare punctuation).
//! 4. Compute a fresh IDF table over the surviving sentences and rank
//!    them by (summed query-term IDF, query-term density).
//!
//! The engine is immutable after construction; `answer` borrows it
//! read-only, so one engine can serve any number of queries.

use std::collections::{HashMap, HashSet};

use passage_rank::{IdfTable, Query, TokenizedFile, TokenizedSentence, top_files, top_sentences};
use passage_text::{sentences, tokenize};

use crate::config::MatchConfig;
use crate::corpus::Corpus;

/// A loaded, tokenized corpus ready to answer queries.
pub struct QueryEngine {
    /// Raw text per document, kept for sentence extraction.
    raw: HashMap<String, String>,
    /// Tokenized documents in corpus order.
    files: Vec<TokenizedFile>,
    /// File-level IDF table, computed once.
    file_idfs: IdfTable,
    config: MatchConfig,
}

impl QueryEngine {
    /// Tokenizes the corpus and precomputes file-level IDF statistics.
    pub fn new(corpus: Corpus, config: MatchConfig) -> Self {
        let files: Vec<TokenizedFile> = corpus
            .documents()
            .iter()
            .map(|doc| TokenizedFile::new(doc.name.clone(), tokenize(&doc.text)))
            .collect();
        let file_idfs = IdfTable::from_units(files.iter().map(|f| f.tokens.as_slice()));

        tracing::info!(
            documents = files.len(),
            vocabulary = file_idfs.len(),
            "corpus indexed"
        );

        let raw = corpus
            .documents()
            .iter()
            .map(|doc| (doc.name.clone(), doc.text.clone()))
            .collect();

        Self {
            raw,
            files,
            file_idfs,
            config,
        }
    }

    /// Answers one query: the top-ranked sentences from the top-ranked
    /// files, verbatim, most relevant first.
    ///
    /// An empty corpus, or top files without a single rankable
    /// sentence, yields an empty answer.
    pub fn answer(&self, query_text: &str) -> Vec<String> {
        let query = Query::new(tokenize(query_text));
        tracing::debug!(terms = query.len(), "query parsed");

        let file_names = top_files(&query, &self.files, &self.file_idfs, self.config.file_matches);
        tracing::debug!(files = ?file_names, "candidate files");

        let candidates = self.collect_sentences(&file_names);
        tracing::debug!(sentences = candidates.len(), "rankable sentences");
        if candidates.is_empty() {
            return Vec::new();
        }

        // Sentence-level IDF is recomputed per query over the candidate
        // set only; it never feeds back into the cached file-level table.
        let sentence_idfs = IdfTable::from_units(candidates.iter().map(|s| s.tokens.as_slice()));
        top_sentences(&query, &candidates, &sentence_idfs, self.config.sentence_matches)
    }

    /// The match-count configuration this engine was built with.
    pub fn config(&self) -> MatchConfig {
        self.config
    }

    /// Extracts the rankable sentences of the named files, in file then
    /// text order. Duplicate sentence texts keep their first occurrence;
    /// sentences with no tokens are discarded here so the ranker never
    /// sees one.
    fn collect_sentences(&self, file_names: &[String]) -> Vec<TokenizedSentence> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut out = Vec::new();

        for name in file_names {
            let Some(text) = self.raw.get(name) else {
                continue;
            };
            for line in text.lines() {
                for sentence in sentences(line) {
                    if seen.contains(sentence) {
                        continue;
                    }
                    let tokens = tokenize(sentence);
                    if tokens.is_empty() {
                        continue;
                    }
                    seen.insert(sentence.to_owned());
                    out.push(TokenizedSentence::new(sentence, tokens));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::RawDocument;

    fn corpus(docs: &[(&str, &str)]) -> Corpus {
        Corpus::from_documents(
            docs.iter()
                .map(|(name, text)| RawDocument {
                    name: name.to_string(),
                    text: text.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn picks_sentence_from_most_relevant_file() {
        let engine = QueryEngine::new(
            corpus(&[
                (
                    "chess.txt",
                    "Chess engines search game trees. Alpha-beta pruning cuts branches.",
                ),
                (
                    "weather.txt",
                    "Rain falls from clouds. Thunderstorms bring heavy rain and wind.",
                ),
            ]),
            MatchConfig::default(),
        );

        let answer = engine.answer("what brings heavy rain");
        assert_eq!(answer, vec!["Thunderstorms bring heavy rain and wind."]);
    }

    #[test]
    fn empty_corpus_means_no_answer() {
        let engine = QueryEngine::new(corpus(&[]), MatchConfig::default());
        assert!(engine.answer("anything at all").is_empty());
    }

    #[test]
    fn stopword_only_sentences_are_never_ranked() {
        let engine = QueryEngine::new(
            corpus(&[(
                "doc.txt",
                "And so it was. The compiler rejected the borrow. Of the!",
            )]),
            MatchConfig::default(),
        );

        // The only sentence with tokens must win; the stopword-only
        // sentences around it are filtered before ranking.
        let answer = engine.answer("compiler borrow");
        assert_eq!(answer, vec!["The compiler rejected the borrow."]);
    }

    #[test]
    fn sentence_match_count_is_honored() {
        let engine = QueryEngine::new(
            corpus(&[(
                "doc.txt",
                "Rust prevents data races. Rust has no garbage collector. Cooking is fun.",
            )]),
            MatchConfig {
                file_matches: 1,
                sentence_matches: 2,
            },
        );

        let answer = engine.answer("rust");
        assert_eq!(answer.len(), 2);
        assert!(answer.iter().all(|s| s.contains("Rust")));
    }

    #[test]
    fn duplicate_sentences_collapse_to_first_occurrence() {
        let engine = QueryEngine::new(
            corpus(&[(
                "doc.txt",
                "The answer is caching.\nThe answer is caching.\nNothing else matters here.",
            )]),
            MatchConfig {
                file_matches: 1,
                sentence_matches: 5,
            },
        );

        let answer = engine.answer("answer caching");
        let hits = answer.iter().filter(|s| s.contains("caching")).count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn answers_are_read_only_and_repeatable() {
        let engine = QueryEngine::new(
            corpus(&[
                ("a.txt", "Giraffes have long necks. Elephants have trunks."),
                ("b.txt", "Penguins cannot fly. Ostriches cannot fly either."),
            ]),
            MatchConfig::default(),
        );

        let first = engine.answer("which birds cannot fly");
        let second = engine.answer("which birds cannot fly");
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
