//! Reusable small widgets/helpers used across view modules.

use iced::widget::{Column, button, column, container, text};
use iced::Element;

use super::super::state::Message;
use super::constants::{PAD, SPACING, TITLE_TEXT};

/// Button that is clickable only when `enabled`.
pub(crate) fn action_button(
    label: &str,
    message: Message,
    enabled: bool,
) -> iced::widget::Button<'_, Message> {
    button(text(label)).on_press_maybe(enabled.then_some(message))
}

/// Titled, bordered section (the "LabelFrame" look).
pub(crate) fn section<'a>(
    title: &'a str,
    body: impl Into<Element<'a, Message>>,
) -> iced::widget::Container<'a, Message> {
    let inner: Column<'a, Message> =
        column![text(title).size(TITLE_TEXT), body.into()].spacing(SPACING);

    container(inner)
        .padding(PAD)
        .style(container::bordered_box)
}
