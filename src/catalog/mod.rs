//! # Catalog Module
//!
//! Builds and persists the media catalog.
//!
//! ## Layout
//!
//! The content root holds one directory per catalog entry. Files directly
//! inside an entry directory become its episodes when they carry a media
//! extension (see [`entry::MEDIA_EXTENSIONS`]); everything else is ignored.
//!
//! ## Lifecycle
//!
//! 1. [`Index::load`] reads the JSON index, rebuilding it first if missing
//! 2. [`Index::verify_keys`] re-derives every entry key from its map key
//! 3. [`Index::sorted_entries`] produces the display order for the browser
//! 4. [`Index::save`] writes the catalog back

pub mod entry;
pub mod error;
pub mod index;

pub use entry::{derive_entry, is_media_file, Entry, Source, MEDIA_EXTENSIONS};
pub use error::CatalogError;
pub use index::Index;
