//! Errors raised while building, loading, or saving the catalog.

use std::path::PathBuf;

/// Failure modes of the index builder.
///
/// A missing index file is not represented here: [`crate::catalog::Index::load`]
/// answers it with a rebuild and only reports [`CatalogError::ReadIndex`] when
/// the file is still unreadable afterwards.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The content root could not be created or listed.
    #[error("cannot access content root {}: {source}", .path.display())]
    ContentRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single entry directory could not be listed. Aborts the whole rebuild.
    #[error("cannot list entry directory '{key}': {source}")]
    ListEntry {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The index file could not be read, even after a rebuild.
    #[error("cannot read index file {}: {source}", .path.display())]
    ReadIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The index file exists but does not hold a valid entry mapping.
    #[error("malformed index file {}: {source}", .path.display())]
    ParseIndex {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The index file could not be written.
    #[error("cannot write index file {}: {source}", .path.display())]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CatalogError {
    /// Whether this error came from persisting the index rather than reading
    /// or deriving it. Such errors are reported but never end a session.
    pub fn is_persistence_write(&self) -> bool {
        matches!(self, Self::WriteIndex { .. } | Self::Serialize(_))
    }
}

/// Convenience alias used throughout the catalog module.
pub type Result<T> = std::result::Result<T, CatalogError>;
