//! passage-engine: the query pipeline around the ranking core.
//!
//! This crate owns everything between the filesystem and the ranked
//! answer:
//! - [`Corpus`]: loads a directory of plain-text files into memory
//! - [`MatchConfig`]: how many files and sentences to surface
//! - [`QueryEngine`]: tokenizes the corpus once, caches the file-level
//!   IDF table, and answers queries as independent read-only operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use passage_engine::{Corpus, MatchConfig, QueryEngine};
//!
//! let corpus = Corpus::load(Path::new("corpus"))?;
//! let engine = QueryEngine::new(corpus, MatchConfig::default());
//!
//! for sentence in engine.answer("When was Python released?") {
//!     println!("{sentence}");
//! }
//! ```

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;

pub use config::MatchConfig;
pub use corpus::{Corpus, RawDocument};
pub use engine::QueryEngine;
pub use error::{EngineError, EngineResult};
