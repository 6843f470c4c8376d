//! passage-rank: the information-retrieval ranking core.
//!
//! This crate is pure computation over already-tokenized text:
//! - [`IdfTable`]: inverse-document-frequency statistics over a set of
//!   ranking units (whole files in the first pass, single sentences in
//!   the second)
//! - [`top_files`]: TF-IDF document ranking for a query
//! - [`top_sentences`]: two-signal sentence ranking (summed query-term
//!   IDF, then query-term density)
//!
//! Inputs are ordered slices rather than maps because ranking ties fall
//! back to input order: every ranking here is a stable sort, so units
//! with equal scores keep their relative input positions. No I/O, no
//! shared state; every function is deterministic in its arguments.

pub mod files;
pub mod idf;
pub mod query;
pub mod sentences;

pub use files::{TokenizedFile, top_files};
pub use idf::IdfTable;
pub use query::Query;
pub use sentences::{TokenizedSentence, top_sentences};
