//! Corpus loading.
//!
//! A corpus is a directory of plain-text files: each file's name is the
//! document identifier, each file's full contents is the raw text.
//! Loading is all-or-nothing; a single unreadable file aborts the load.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

/// One document of the corpus, exactly as read from disk.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// File name inside the corpus directory.
    pub name: String,
    /// Full file contents.
    pub text: String,
}

/// An immutable, in-memory corpus.
///
/// Documents are held in file-name order. That order is what ranking
/// ties fall back to, so loading sorts the directory listing instead of
/// trusting whatever order the OS happens to return.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<RawDocument>,
}

impl Corpus {
    /// Reads every regular file under `dir` into a corpus.
    ///
    /// Subdirectories are skipped; an empty directory yields a valid,
    /// empty corpus. Any read failure is fatal.
    pub fn load(dir: &Path) -> EngineResult<Self> {
        let entries = fs::read_dir(dir).map_err(|source| EngineError::CorpusDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| EngineError::CorpusDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path).map_err(|source| EngineError::CorpusFile {
                path: path.clone(),
                source,
            })?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            documents.push(RawDocument { name, text });
        }

        Ok(Self { documents })
    }

    /// Builds a corpus from in-memory documents, preserving their order.
    /// Intended for tests and embedding.
    pub fn from_documents(documents: Vec<RawDocument>) -> Self {
        Self { documents }
    }

    /// The documents in file-name order.
    pub fn documents(&self) -> &[RawDocument] {
        &self.documents
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if the directory contained no files.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
