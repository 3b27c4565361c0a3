//! Naming rules for the source site and the corpus tree
//!
//! This module provides:
//! - Artist slug derivation for building artist index URLs
//! - Song title sanitization for corpus file names
//! - Artist directory naming

mod filename;
mod slug;

pub use filename::{
    artist_dir_name, entry_file_name, sanitize_title, ENTRY_EXTENSION, MAX_STEM_BYTES,
    REPLACEMENT_CHAR, RESERVED_CHARS,
};
pub use slug::{artist_slug, generic_slug, BUILTIN_SLUG_OVERRIDES};
