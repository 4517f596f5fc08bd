//! gui/update/save.rs
//! Save (remove-all, then set each tag) and "Save and Exit".

use std::path::{Path, PathBuf};
use std::sync::Arc;

use iced::Task;
use tracing::debug;

use crate::core::error::TagError;
use crate::core::store;
use crate::core::types::TagSet;

use super::super::state::{AfterSave, Message, Quill, TagDraft};
use super::super::util::saved_banner;
use super::dialog::show_error;
use super::util::spawn_blocking;

pub(crate) fn save_pressed(state: &mut Quill, after: AfterSave) -> Task<Message> {
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

    let tags = state.draft.to_tags();

    state.busy = true;
    state.status = format!("Writing tags to {}...", state.session.file_name());

    let tool = Arc::clone(&state.tool);
    let to_write = tags.clone();
    let job_path = path.clone();
    Task::perform(
        spawn_blocking(move || store::save(tool.as_ref(), &job_path, &to_write)),
        move |result| Message::SaveFinished(path, after, tags, result),
    )
}

pub(crate) fn save_finished(
    state: &mut Quill,
    path: PathBuf,
    after: AfterSave,
    saved: TagSet,
    result: Result<(), TagError>,
) -> Task<Message> {
    state.busy = false;

    if !state.session.is_current(&path) {
        debug!(path = %path.display(), "dropping save result for a previous file");
        return Task::none();
    }

    match result {
        Ok(()) => {
            if after == AfterSave::Exit {
                return iced::exit();
            }

            // Show what is on disk now (skipped lines and blank fields vanish).
            state.session.record_saved(&saved);
            state.draft = TagDraft::from_tags(state.session.tags());
            state.status = format!("Tags saved to {}", state.session.file_name());
            state.success = Some(saved_banner(chrono::Local::now()));
        }
        Err(e) => {
            state.status = "Save failed".to_string();
            state.success = None;
            show_error(state, "Failed to save tags", &e);
        }
    }

    Task::none()
}
