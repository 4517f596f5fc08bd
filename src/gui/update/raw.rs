//! gui/update/raw.rs
//! Read-only VORBIS_COMMENT dump in a modal.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use iced::Task;
use tracing::debug;

use crate::core::error::TagError;
use crate::core::store;

use super::super::state::{Dialog, Message, Quill};
use super::dialog::show_error;
use super::util::spawn_blocking;

pub(crate) fn show_raw_pressed(state: &mut Quill) -> Task<Message> {
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

    let tool = Arc::clone(&state.tool);
    let job_path = path.clone();
    Task::perform(
        spawn_blocking(move || store::list_vorbis_comment(tool.as_ref(), &job_path)),
        move |result| Message::RawFinished(path, result),
    )
}

pub(crate) fn raw_finished(
    state: &mut Quill,
    path: PathBuf,
    result: Result<String, TagError>,
) -> Task<Message> {
    state.busy = false;

    if !state.session.is_current(&path) {
        debug!(path = %path.display(), "dropping raw output for a previous file");
        return Task::none();
    }

    match result {
        Ok(text) => {
            state.dialog = Some(Dialog::RawOutput {
                file_name: state.session.file_name(),
                text,
            });
        }
        Err(e) => show_error(state, "Failed to get raw output", &e),
    }

    Task::none()
}
