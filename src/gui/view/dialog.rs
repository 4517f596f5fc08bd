//! Modal overlay: errors, info, confirmation, raw output.
//!
//! Drawn on top of the whole window; `opaque` swallows every click
//! that would otherwise reach the form underneath.

use iced::widget::{center, column, container, opaque, row, scrollable, stack, text};
use iced::{Background, Color, Element, Font, Length};

use super::super::state::{Dialog, Message};
use super::constants::{DIALOG_W, PAD, RAW_DIALOG_H, RAW_DIALOG_W, SPACING, TITLE_TEXT};
use super::widgets::action_button;

pub(crate) fn with_modal<'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: &'a Dialog,
) -> Element<'a, Message> {
    let card = container(dialog_body(dialog))
        .padding(PAD * 2.0)
        .style(container::rounded_box);

    let backdrop = center(opaque(card)).style(|_theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..Color::BLACK
        })),
        ..container::Style::default()
    });

    stack![base.into(), opaque(backdrop)].into()
}

fn dialog_body(dialog: &Dialog) -> Element<'_, Message> {
    match dialog {
        Dialog::Error { title, body } | Dialog::Info { title, body } => column![
            text(title.as_str()).size(TITLE_TEXT),
            text(body.as_str()),
            action_button("OK", Message::DismissDialog, true),
        ]
        .spacing(SPACING * 1.5)
        .width(Length::Fixed(DIALOG_W))
        .into(),

        Dialog::ConfirmRemoveAll => column![
            text("Confirm").size(TITLE_TEXT),
            text("Remove all tags from this file?"),
            row![
                action_button("Yes", Message::RemoveAllConfirmed, true),
                action_button("No", Message::DismissDialog, true),
            ]
            .spacing(SPACING),
        ]
        .spacing(SPACING * 1.5)
        .width(Length::Fixed(DIALOG_W))
        .into(),

        Dialog::RawOutput { file_name, text: raw } => column![
            text(format!("Raw MetaFLAC Output - {file_name}")).size(TITLE_TEXT),
            scrollable(text(raw.as_str()).font(Font::MONOSPACE))
                .height(Length::Fill)
                .width(Length::Fill),
            action_button("Close", Message::DismissDialog, true),
        ]
        .spacing(SPACING)
        .width(Length::Fixed(RAW_DIALOG_W))
        .height(Length::Fixed(RAW_DIALOG_H))
        .into(),
    }
}
