//! Reading documents and stopword lists from disk.
//!
//! Any failure here aborts the comparison; unreadable sources are never
//! replaced with empty content.

use crate::models::Document;
use crate::tokenize::Stopwords;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("resource unavailable: {path}: {source}")]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::ResourceUnavailable { path, .. } => path,
        }
    }
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    // Invalid UTF-8 surfaces as io::ErrorKind::InvalidData
    std::fs::read_to_string(path).map_err(|source| LoadError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a single document. Its name is the path as given.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let text = read_text(path)?;
    debug!(path = %path.display(), chars = text.chars().count(), "loaded document");
    Ok(Document::new(path.display().to_string(), text))
}

/// Load several documents, stopping at the first failure.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Document>, LoadError> {
    paths.iter().map(|p| load_document(p.as_ref())).collect()
}

/// Load a stopword list with one word per line.
pub fn load_stopwords(path: &Path) -> Result<Stopwords, LoadError> {
    let stopwords = Stopwords::parse(&read_text(path)?);
    debug!(path = %path.display(), count = stopwords.len(), "loaded stopwords");
    Ok(stopwords)
}
