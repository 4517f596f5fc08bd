//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{AfterSave, Message, Quill};

mod dialog;
mod edit;
mod file;
mod raw;
mod remove;
mod save;
mod util;

/// Boot: build the state, and load the startup file if one was given.
pub(crate) fn boot(state: Quill) -> (Quill, Task<Message>) {
    let mut state = state;
    let task = if state.session.path().is_some() {
        file::load_pressed(&mut state)
    } else {
        Task::none()
    };
    (state, task)
}

pub(crate) fn update(state: &mut Quill, message: Message) -> Task<Message> {
    match message {
        // File
        Message::BrowsePressed => file::browse_pressed(state),
        Message::FilePicked(path) => file::file_picked(state, path),
        Message::LoadPressed => file::load_pressed(state),
        Message::LoadFinished(path, result) => file::load_finished(state, path, result),

        // Editing
        Message::FieldChanged(field, value) => edit::field_changed(state, field, value),
        Message::ClearField(field) => edit::clear_field(state, field),
        Message::CustomEdited(action) => edit::custom_edited(state, action),
        Message::ClearForm => edit::clear_form(state),

        // Save
        Message::SavePressed => save::save_pressed(state, AfterSave::Stay),
        Message::SaveAndExitPressed => save::save_pressed(state, AfterSave::Exit),
        Message::SaveFinished(path, after, tags, result) => {
            save::save_finished(state, path, after, tags, result)
        }

        // Remove all
        Message::RemoveAllPressed => remove::remove_all_pressed(state),
        Message::RemoveAllConfirmed => remove::remove_all_confirmed(state),
        Message::RemoveAllFinished(path, result) => {
            remove::remove_all_finished(state, path, result)
        }

        // Raw view
        Message::ShowRawPressed => raw::show_raw_pressed(state),
        Message::RawFinished(path, result) => raw::raw_finished(state, path, result),

        Message::DismissDialog => dialog::dismiss(state),
    }
}
