//! passage-text: text normalization for the passage retrieval pipeline.
//!
//! This crate is the boundary between raw text and the ranking core:
//! - [`tokenize`] turns raw text into an ordered sequence of normalized
//!   word tokens (lowercase, punctuation stripped, stopwords removed)
//! - [`sentences`] segments a line of raw text into sentence substrings,
//!   preserved verbatim for display
//!
//! The ranking crates never see raw text; everything they score goes
//! through this crate first.

pub mod sentences;
pub mod tokenizer;

pub use sentences::sentences;
pub use tokenizer::tokenize;
