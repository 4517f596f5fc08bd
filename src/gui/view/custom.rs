//! Left panel: free-form custom tags, one KEY=VALUE per line.

use iced::Length;
use iced::widget::{column, text, text_editor};

use super::super::state::{Message, Quill};
use super::constants::SMALL_TEXT;
use super::widgets::section;

pub(crate) fn build_custom_panel(state: &Quill) -> iced::widget::Container<'_, Message> {
    let editor = text_editor(&state.draft.custom)
        .placeholder("KEY=VALUE")
        .on_action(Message::CustomEdited)
        .height(Length::Fill);

    section(
        "Custom Tags",
        column![
            editor,
            text("Lines without '=' are not saved.").size(SMALL_TEXT),
        ]
        .spacing(6),
    )
}
