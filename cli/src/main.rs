//! Entry point for the passage binary.
//!
//! Usage: `passage <corpus-dir>`
//!
//! Loads every plain-text file under the corpus directory, prompts for
//! one query on stdin, and prints the most relevant sentence(s) to
//! stdout, one per line, verbatim.
//!
//! Configuration via environment:
//! - `PASSAGE_FILE_MATCHES`: how many top files to draw sentences from (default: 1)
//! - `PASSAGE_SENTENCE_MATCHES`: how many sentences to print (default: 1)
//! - `PASSAGE_LOG`: tracing filter for diagnostics on stderr (default: warn)

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use passage_engine::{Corpus, MatchConfig, QueryEngine};
use tracing_subscriber::EnvFilter;

/// Answer a question from a directory of plain-text files.
#[derive(Parser)]
#[command(name = "passage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the corpus directory
    corpus: PathBuf,
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let corpus = Corpus::load(&cli.corpus)
        .with_context(|| format!("loading corpus from {}", cli.corpus.display()))?;
    let engine = QueryEngine::new(corpus, MatchConfig::from_env());

    let query = read_query()?;
    for sentence in engine.answer(&query) {
        println!("{sentence}");
    }

    Ok(())
}

/// Prompts for and reads one line of query text.
fn read_query() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        print!("{}", "Query: ".cyan().bold());
        io::stdout().flush().context("flushing prompt")?;
    }

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("reading query from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Diagnostics go to stderr so stdout carries nothing but the answer.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("PASSAGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
