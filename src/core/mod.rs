//! core/mod.rs
//!
//! The brain of the app:
//! - Describe and launch metaflac calls (`bridge`)
//! - Turn metaflac's text into a `TagSet` and back (`store`)
//! - Track the one file being edited (`session`)
//!
//! No GUI code lives here, so everything can be driven from tests.

pub mod bridge;
pub mod error;
pub mod session;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use error::{Result, TagError};

/// Accept a user-supplied path only if it exists and ends in `.flac`
/// (any case). Returns it made absolute.
pub fn validate_flac_path(path: &Path) -> Result<PathBuf> {
    let is_flac = path
        .to_string_lossy()
        .to_lowercase()
        .ends_with(".flac");

    if !path.exists() || !is_flac {
        return Err(TagError::Validation(format!(
            "File '{}' does not exist or is not a FLAC file.",
            path.display()
        )));
    }

    std::path::absolute(path).map_err(|e| {
        TagError::Validation(format!("Cannot resolve '{}': {e}", path.display()))
    })
}
