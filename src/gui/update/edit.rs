//! gui/update/edit.rs
//! Form edits. Nothing here touches the file.

use iced::Task;
use iced::widget::text_editor;

use crate::core::types::Field;

use super::super::state::{Message, Quill, TagDraft};

pub(crate) fn field_changed(state: &mut Quill, field: Field, value: String) -> Task<Message> {
    state.draft.fields.insert(field, value);
    Task::none()
}

/// The per-field "delete" button: empties that input only.
pub(crate) fn clear_field(state: &mut Quill, field: Field) -> Task<Message> {
    state.draft.fields.remove(&field);
    Task::none()
}

pub(crate) fn custom_edited(state: &mut Quill, action: text_editor::Action) -> Task<Message> {
    state.draft.custom.perform(action);
    Task::none()
}

/// Empty every input and the success line. The file is untouched.
pub(crate) fn clear_form(state: &mut Quill) -> Task<Message> {
    state.draft = TagDraft::default();
    state.success = None;
    Task::none()
}
