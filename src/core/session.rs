//! core/session.rs
//! The one file being edited, and what we last knew its tags to be.
//!
//! Passed explicitly to whoever needs it (GUI state owns one);
//! there is no global "current file".

use std::path::{Path, PathBuf};

use super::error::{Result, TagError};
use super::types::TagSet;

#[derive(Debug, Clone, Default)]
pub struct Session {
    path: Option<PathBuf>,
    tags: TagSet,
}

impl Session {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            tags: TagSet::new(),
        }
    }

    /// Switch to another file. Tags from the previous file are dropped,
    /// never merged.
    pub fn select(&mut self, path: PathBuf) {
        *self = Self::new(Some(path));
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether `path` is the file this session is about. Results for any
    /// other path belong to an earlier session.
    pub fn is_current(&self, path: &Path) -> bool {
        self.path.as_deref() == Some(path)
    }

    /// The selected file, or the "select a file first" validation error.
    pub fn require_path(&self) -> Result<&Path> {
        self.path
            .as_deref()
            .ok_or_else(|| TagError::Validation("Please select a FLAC file first".to_string()))
    }

    /// Bare file name for status lines.
    pub fn file_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// After a load.
    pub fn replace_tags(&mut self, tags: TagSet) {
        self.tags = tags;
    }

    /// After a save: remember what a reload would now return.
    pub fn record_saved(&mut self, saved: &TagSet) {
        self.tags = saved.normalized();
    }

    /// After remove-all.
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }
}
