//! End-to-end pipeline test: corpus directory on disk through to the
//! ranked answer.

use std::fs;

use passage_engine::{Corpus, MatchConfig, QueryEngine};
use tempfile::TempDir;

fn write_corpus(dir: &TempDir, files: &[(&str, &str)]) {
    for (name, text) in files {
        fs::write(dir.path().join(name), text).unwrap();
    }
}

#[test]
fn answers_from_a_directory_corpus() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        &dir,
        &[
            (
                "python.txt",
                "Python is a programming language.\n\
                 Python was first released in 1991 by Guido van Rossum.\n\
                 It emphasizes readability.",
            ),
            (
                "rust.txt",
                "Rust is a systems programming language.\n\
                 Rust guarantees memory safety without garbage collection.",
            ),
        ],
    );

    let corpus = Corpus::load(dir.path()).unwrap();
    let engine = QueryEngine::new(corpus, MatchConfig::default());

    let answer = engine.answer("when was python released");
    assert_eq!(
        answer,
        vec!["Python was first released in 1991 by Guido van Rossum."]
    );
}

#[test]
fn multiple_file_matches_widen_the_sentence_pool() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        &dir,
        &[
            ("a.txt", "Glaciers carve valleys. Glaciers move slowly."),
            ("b.txt", "Glaciers are melting faster every decade."),
            ("c.txt", "Deserts receive little rainfall."),
        ],
    );

    let corpus = Corpus::load(dir.path()).unwrap();
    let engine = QueryEngine::new(
        corpus,
        MatchConfig {
            file_matches: 2,
            sentence_matches: 3,
        },
    );

    let answer = engine.answer("glaciers");
    assert_eq!(answer.len(), 3);
    assert!(answer.iter().all(|s| s.contains("Glaciers")));
}

#[test]
fn empty_directory_yields_no_answer() {
    let dir = TempDir::new().unwrap();
    let corpus = Corpus::load(dir.path()).unwrap();
    let engine = QueryEngine::new(corpus, MatchConfig::default());

    assert!(engine.answer("anything").is_empty());
}

#[test]
fn query_with_no_known_words_still_returns_a_sentence() {
    // Unknown words score 0 everywhere; ranking degenerates to input
    // order instead of failing.
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, &[("only.txt", "A lone sentence about gardening.")]);

    let corpus = Corpus::load(dir.path()).unwrap();
    let engine = QueryEngine::new(corpus, MatchConfig::default());

    let answer = engine.answer("quantum chromodynamics");
    assert_eq!(answer, vec!["A lone sentence about gardening."]);
}
