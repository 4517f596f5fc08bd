//! gui/update/dialog.rs
//! Opening and dismissing the modal overlay.

use iced::Task;
use tracing::warn;

use crate::core::error::TagError;

use super::super::state::{Dialog, Message, Quill};

pub(crate) fn show_error(state: &mut Quill, title: &str, err: &TagError) {
    warn!(error = %err, "{title}");
    state.dialog = Some(Dialog::Error {
        title: title.to_string(),
        body: err.to_string(),
    });
}

pub(crate) fn show_info(state: &mut Quill, title: &str, body: &str) {
    state.dialog = Some(Dialog::Info {
        title: title.to_string(),
        body: body.to_string(),
    });
}

pub(crate) fn dismiss(state: &mut Quill) -> Task<Message> {
    state.dialog = None;
    Task::none()
}
