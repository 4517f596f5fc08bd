//! Top section: Browse / path / Load / Save, and the success line.

use iced::widget::{column, row, text, text_input};
use iced::{Alignment, Length};

use super::super::state::{Message, Quill};
use super::constants::{PAD, SMALL_TEXT, SPACING, SUCCESS_GREEN};
use super::widgets::{action_button, section};

pub(crate) fn build_file_bar(state: &Quill) -> iced::widget::Container<'_, Message> {
    let enabled = state.can_act();

    let path = state
        .session
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    // No on_input: the path is read-only, it changes through Browse.
    let path_field = text_input("No file selected", &path).width(Length::Fill);

    let load_save = column![
        action_button("Load Tags", Message::LoadPressed, enabled),
        action_button("Save Tags", Message::SavePressed, enabled),
    ]
    .spacing(2);

    let top = row![
        action_button("Browse", Message::BrowsePressed, enabled),
        path_field,
        load_save,
    ]
    .spacing(SPACING)
    .align_y(Alignment::Center);

    let success = text(state.success.clone().unwrap_or_default())
        .size(SMALL_TEXT)
        .color(SUCCESS_GREEN);

    section("File Selection", column![top, success].spacing(PAD / 2.0))
}
