//! Error types for the query pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while building the query pipeline.
///
/// All of these are fatal startup conditions: the pipeline never runs
/// over a partially loaded corpus.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The corpus directory could not be read.
    #[error("failed to read corpus directory {path}: {source}")]
    CorpusDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file inside the corpus directory could not be read.
    #[error("failed to read corpus file {path}: {source}")]
    CorpusFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
