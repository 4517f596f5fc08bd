//! Right panel: one input + "delete" button per well-known field.

use iced::widget::{Column, column, row, scrollable, text, text_input};
use iced::{Alignment, Length};

use crate::core::types::Field;

use super::super::state::{Message, Quill};
use super::super::util::field_label;
use super::constants::{DELETE_W, LABEL_W, SPACING};
use super::widgets::{action_button, section};

fn field_row(state: &Quill, field: Field) -> iced::widget::Row<'_, Message> {
    row![
        text(field_label(field.key())).width(Length::Fixed(LABEL_W)),
        text_input("", state.draft.field(field))
            .on_input(move |s| Message::FieldChanged(field, s))
            .width(Length::Fill),
        action_button("delete", Message::ClearField(field), true).width(Length::Fixed(DELETE_W)),
    ]
    .spacing(SPACING)
    .align_y(Alignment::Center)
}

pub(crate) fn build_tags_panel(state: &Quill) -> iced::widget::Container<'_, Message> {
    let rows: Column<'_, Message> = Field::ALL
        .into_iter()
        .fold(column![], |col, field| col.push(field_row(state, field)))
        .spacing(6)
        .padding(iced::Padding {
            right: 14.0,
            ..iced::Padding::ZERO
        });

    section("Metadata Tags", scrollable(rows).height(Length::Fill))
}
