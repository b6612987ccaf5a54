//! # Catalog Entries
//!
//! One [`Entry`] per directory under the content root, holding one [`Source`]
//! per media file found directly inside that directory.
//!
//! ```text
//! content/
//! ├── showA/          -> Entry { key: "showA", episodes: [ep1] }
//! │   ├── ep1.mp4     -> Source { title: "ep1", source: "content/showA/ep1.mp4" }
//! │   └── notes.txt      (ignored)
//! └── showB/          -> Entry { key: "showB", episodes: [] }
//! ```

use crate::catalog::error::{CatalogError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognized as playable media (compared case-insensitively).
pub const MEDIA_EXTENSIONS: &[&str] = &["mp4", "webm"];

/// A single playable file belonging to an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    #[serde(rename = "source")]
    pub path: PathBuf,
}

/// One catalog item, derived from one directory under the content root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Directory name. Always equal to the key this entry is stored under.
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Path to a cover image, empty when unset.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub episodes: Vec<Source>,
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Entry {
    /// A fresh entry for `key` with no tags, no cover and no episodes.
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            title: key.to_string(),
            tags: Vec::new(),
            cover: String::new(),
            episodes: Vec::new(),
        }
    }

    /// Append `file` as an episode if it is a media file.
    ///
    /// Returns `true` when a [`Source`] was added.
    pub fn push_source(&mut self, file: &Path) -> bool {
        if !is_media_file(file) {
            return false;
        }
        let Some(title) = file.file_stem().and_then(|s| s.to_str()) else {
            return false;
        };
        self.episodes.push(Source {
            title: title.to_string(),
            path: file.to_path_buf(),
        });
        true
    }
}

/// Whether `path` names a media file, judged by its extension alone.
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MEDIA_EXTENSIONS
                .iter()
                .any(|media| ext.eq_ignore_ascii_case(media))
        })
}

/// Build the [`Entry`] for the directory `content_root/key`.
///
/// Only files directly inside the directory are considered, in the order the
/// filesystem lists them. Subdirectories are skipped.
pub fn derive_entry(content_root: &Path, key: &str) -> Result<Entry> {
    let dir = content_root.join(key);
    let mut entry = Entry::new(key);

    for item in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let item = item.map_err(|err| CatalogError::ListEntry {
            key: key.to_string(),
            source: io::Error::from(err),
        })?;

        let path = item.path();
        if !path.is_file() {
            continue;
        }
        entry.push_source(path);
    }

    tracing::debug!(key, episodes = entry.episodes.len(), "derived entry");
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_entry_null_fields_read_as_empty() {
        let entry: Entry = serde_json::from_str(
            r#"{"key": null, "title": "X", "tags": null, "cover": null, "episodes": null}"#,
        )
        .unwrap();
        assert!(entry.key.is_empty());
        assert_eq!(entry.title, "X");
        assert!(entry.tags.is_empty());
        assert!(entry.cover.is_empty());
        assert!(entry.episodes.is_empty());
    }

    #[test]
    fn test_entry_new_defaults() {
        let entry = Entry::new("showA");
        assert_eq!(entry.key, "showA");
        assert_eq!(entry.title, "showA");
        assert!(entry.tags.is_empty());
        assert!(entry.cover.is_empty());
        assert!(entry.episodes.is_empty());
    }

    #[test]
    fn test_is_media_file() {
        assert!(is_media_file(Path::new("ep1.mp4")));
        assert!(is_media_file(Path::new("ep1.webm")));
        assert!(is_media_file(Path::new("EP1.MP4")));
        assert!(!is_media_file(Path::new("notes.txt")));
        assert!(!is_media_file(Path::new("mp4")));
        assert!(!is_media_file(Path::new("clip.mp4.part")));
    }

    #[test]
    fn test_push_source_strips_extension() {
        let mut entry = Entry::new("show");
        assert!(entry.push_source(Path::new("content/show/pilot.webm")));
        assert!(entry.push_source(Path::new("content/show/finale.mp4")));
        assert!(!entry.push_source(Path::new("content/show/cover.jpg")));

        let titles: Vec<&str> = entry.episodes.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["pilot", "finale"]);
        assert_eq!(
            entry.episodes[0].path,
            PathBuf::from("content/show/pilot.webm")
        );
    }

    #[test]
    fn test_derive_entry_filters_media() {
        let temp_dir = TempDir::new().unwrap();
        let show = temp_dir.path().join("showA");
        fs::create_dir(&show).unwrap();
        fs::write(show.join("ep1.mp4"), b"").unwrap();
        fs::write(show.join("notes.txt"), b"").unwrap();
        fs::create_dir(show.join("extras.mp4")).unwrap();

        let entry = derive_entry(temp_dir.path(), "showA").unwrap();
        assert_eq!(entry.key, "showA");
        assert_eq!(entry.title, "showA");
        assert_eq!(entry.episodes.len(), 1);
        assert_eq!(entry.episodes[0].title, "ep1");
        assert_eq!(entry.episodes[0].path, show.join("ep1.mp4"));
    }

    #[test]
    fn test_derive_entry_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = derive_entry(temp_dir.path(), "ghost");
        assert!(matches!(
            result,
            Err(CatalogError::ListEntry { ref key, .. }) if key == "ghost"
        ));
    }

    #[test]
    fn test_entry_json_field_names() {
        let mut entry = Entry::new("showA");
        entry.push_source(Path::new("content/showA/ep1.mp4"));

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["key"], "showA");
        assert_eq!(value["title"], "showA");
        assert_eq!(value["cover"], "");
        assert!(value["tags"].as_array().unwrap().is_empty());
        assert_eq!(value["episodes"][0]["title"], "ep1");
        assert_eq!(value["episodes"][0]["source"], "content/showA/ep1.mp4");
    }
}
