//! # Index Persistence
//!
//! The [`Index`] maps directory names to [`Entry`] records and lives in a
//! single JSON file:
//!
//! ```json
//! {
//!   "showA": {
//!     "key": "showA",
//!     "title": "showA",
//!     "tags": [],
//!     "cover": "",
//!     "episodes": [{ "title": "ep1", "source": "content/showA/ep1.mp4" }]
//!   }
//! }
//! ```
//!
//! Loading a missing file rebuilds it from the content root first. Every load
//! re-derives `Entry::key` from the map key, so hand edits that desynchronize
//! the two are repaired.

use crate::catalog::entry::{derive_entry, Entry};
use crate::catalog::error::{CatalogError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The full catalog and the file it is persisted at.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    path: PathBuf,
    /// Entries keyed by directory name.
    pub entries: BTreeMap<String, Entry>,
}

impl Index {
    pub fn new(path: PathBuf, entries: BTreeMap<String, Entry>) -> Self {
        Self { path, entries }
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the index stored at `path`.
    ///
    /// When the file does not exist the catalog is rebuilt from
    /// `content_root`, saved to `path`, and read back once. Any other read
    /// failure, or a file that is not a valid entry mapping, is an error.
    pub fn load(path: &Path, content_root: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "index file missing, rebuilding");
                Self::rebuild(path, content_root)?;
                fs::read_to_string(path).map_err(|source| CatalogError::ReadIndex {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Err(source) => {
                return Err(CatalogError::ReadIndex {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let entries: BTreeMap<String, Entry> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::ParseIndex {
                path: path.to_path_buf(),
                source,
            })?;

        let mut index = Self::new(path.to_path_buf(), entries);
        index.verify_keys();
        tracing::info!(path = %path.display(), entries = index.len(), "index loaded");
        Ok(index)
    }

    /// Derive a fresh catalog from the directories under `content_root` and
    /// persist it at `path`.
    ///
    /// The content root is created when absent. If any entry directory cannot
    /// be listed the rebuild is abandoned and nothing is written.
    pub fn rebuild(path: &Path, content_root: &Path) -> Result<Self> {
        let root_err = |source: io::Error| CatalogError::ContentRoot {
            path: content_root.to_path_buf(),
            source,
        };

        fs::create_dir_all(content_root).map_err(root_err)?;

        let mut entries = BTreeMap::new();
        for item in WalkDir::new(content_root).min_depth(1).max_depth(1) {
            let item = item.map_err(|err| root_err(io::Error::from(err)))?;
            if !item.path().is_dir() {
                continue;
            }

            let Some(key) = item.file_name().to_str() else {
                tracing::warn!(path = %item.path().display(), "skipping non UTF-8 directory name");
                continue;
            };

            let entry = derive_entry(content_root, key)?;
            entries.insert(key.to_string(), entry);
        }

        let index = Self::new(path.to_path_buf(), entries);
        index.save()?;
        tracing::info!(
            root = %content_root.display(),
            entries = index.len(),
            "index rebuilt"
        );
        Ok(index)
    }

    /// Write the entry mapping to the index path, replacing whatever is there.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(|source| CatalogError::WriteIndex {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "index saved");
        Ok(())
    }

    /// Overwrite every `Entry::key` with the map key it is stored under.
    ///
    /// Returns how many entries needed repair.
    pub fn verify_keys(&mut self) -> usize {
        let mut repaired = 0;
        for (key, entry) in &mut self.entries {
            if entry.key != *key {
                tracing::warn!(stored = %entry.key, key = %key, "repairing entry key");
                repaired += 1;
            }
            entry.key.clone_from(key);
        }
        repaired
    }

    /// Entries ordered for display: by title, then by key.
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut items: Vec<Entry> = self.entries.values().cloned().collect();
        items.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.key.cmp(&b.key)));
        items
    }
}
