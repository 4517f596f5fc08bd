//! gui/update/remove.rs
//! Remove every tag from the file, after confirmation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use iced::Task;
use tracing::debug;

use crate::core::error::TagError;
use crate::core::store;

use super::super::state::{Dialog, Message, Quill, TagDraft};
use super::dialog::{show_error, show_info};
use super::util::spawn_blocking;

pub(crate) fn remove_all_pressed(state: &mut Quill) -> Task<Message> {
    if !state.can_act() {
        return Task::none();
    }

    if let Err(e) = state.session.require_path().map(|_| ()) {
        show_error(state, "Warning", &e);
        return Task::none();
    }

    state.dialog = Some(Dialog::ConfirmRemoveAll);
    Task::none()
}

pub(crate) fn remove_all_confirmed(state: &mut Quill) -> Task<Message> {
    if state.busy || state.dialog != Some(Dialog::ConfirmRemoveAll) {
        return Task::none();
    }
    state.dialog = None;

    let path = match state.session.require_path().map(Path::to_path_buf) {
        Ok(p) => p,
        Err(e) => {
            show_error(state, "Warning", &e);
            return Task::none();
        }
    };

    state.busy = true;
    state.status = format!("Removing tags from {}...", state.session.file_name());

    let tool = Arc::clone(&state.tool);
    let job_path = path.clone();
    Task::perform(
        spawn_blocking(move || store::remove_all(tool.as_ref(), &job_path)),
        move |result| Message::RemoveAllFinished(path, result),
    )
}

/// On success the form is emptied so it matches the file again.
pub(crate) fn remove_all_finished(
    state: &mut Quill,
    path: PathBuf,
    result: Result<(), TagError>,
) -> Task<Message> {
    state.busy = false;

    if !state.session.is_current(&path) {
        debug!(path = %path.display(), "dropping remove-all result for a previous file");
        return Task::none();
    }

    match result {
        Ok(()) => {
            state.session.clear_tags();
            state.draft = TagDraft::default();
            state.success = None;
            state.status = format!("All tags removed from {}", state.session.file_name());
            show_info(state, "Success", "All tags removed successfully!");
        }
        Err(e) => {
            state.status = "Remove failed".to_string();
            show_error(state, "Failed to remove tags", &e);
        }
    }

    Task::none()
}
