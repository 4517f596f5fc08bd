//! gui/update/file.rs
//! File selection + loading tags into the form.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use iced::Task;
use tracing::{debug, info, warn};

use crate::core::error::TagError;
use crate::core::store;
use crate::core::types::TagSet;

use super::super::state::{Message, Quill, TagDraft};
use super::dialog::show_error;
use super::util::spawn_blocking;

pub(crate) fn browse_pressed(state: &mut Quill) -> Task<Message> {
    if !state.can_act() {
        return Task::none();
    }

    // The dialog is async; nothing may start until it reports back.
    state.picking = true;

    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Select FLAC file")
                .add_filter("FLAC files", &["flac"])
                .add_filter("All files", &["*"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FilePicked,
    )
}

/// A new file replaces the session wholesale, then its tags are loaded.
pub(crate) fn file_picked(state: &mut Quill, picked: Option<PathBuf>) -> Task<Message> {
    state.picking = false;

    let Some(path) = picked else {
        return Task::none();
    };

    if state.busy {
        warn!(path = %path.display(), "file selected while metaflac is running; ignored");
        return Task::none();
    }

    info!(path = %path.display(), "file selected");
    state.session.select(path);
    state.draft = TagDraft::default();
    state.success = None;
    state.status = format!("Selected: {}", state.session.file_name());

    load_pressed(state)
}

pub(crate) fn load_pressed(state: &mut Quill) -> Task<Message> {
    if !state.can_act() {
        return Task::none();
    }

    let path = match state.session.require_path().map(Path::to_path_buf) {
        Ok(p) => p,
        Err(e) => {
            show_error(state, "Warning", &e);
            return Task::none();
        }
    };

    state.busy = true;
    state.status = format!("Loading tags from {}...", state.session.file_name());

    let tool = Arc::clone(&state.tool);
    let job_path = path.clone();
    Task::perform(
        spawn_blocking(move || store::load(tool.as_ref(), &job_path)),
        move |result| Message::LoadFinished(path, result),
    )
}

pub(crate) fn load_finished(
    state: &mut Quill,
    path: PathBuf,
    result: Result<TagSet, TagError>,
) -> Task<Message> {
    state.busy = false;

    if !state.session.is_current(&path) {
        debug!(path = %path.display(), "dropping load result for a previous file");
        return Task::none();
    }

    match result {
        Ok(tags) => {
            state.session.replace_tags(tags);
            state.draft = TagDraft::from_tags(state.session.tags());
            state.success = None;
            state.status = format!("Loaded tags from {}", state.session.file_name());
        }
        Err(e) => {
            state.status = "Load failed".to_string();
            show_error(state, "Failed to load tags", &e);
        }
    }

    Task::none()
}
