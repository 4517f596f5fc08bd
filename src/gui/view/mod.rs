//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod custom;
mod dialog;
mod file_bar;
mod tags;
mod widgets;

use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use super::state::{Message, Quill};
use constants::{PAD, SMALL_TEXT};
use widgets::action_button;

pub(crate) fn view(state: &Quill) -> Element<'_, Message> {
    let enabled = state.can_act();

    let file_bar = file_bar::build_file_bar(state).width(Length::Fill);

    // Custom tags ~1/3, metadata ~2/3.
    let custom = custom::build_custom_panel(state)
        .width(Length::FillPortion(1))
        .height(Length::Fill);

    let save_exit = container(action_button(
        "Save Tags and Exit",
        Message::SaveAndExitPressed,
        enabled,
    ))
    .center_x(Length::Fill);

    let metadata = column![
        save_exit,
        tags::build_tags_panel(state).height(Length::Fill),
    ]
    .spacing(PAD / 2.0)
    .width(Length::FillPortion(2));

    let body = row![custom, metadata].spacing(PAD).height(Length::Fill);

    let actions = column![
        container(action_button("Save Tags", Message::SavePressed, enabled)).center_x(Length::Fill),
        container(
            row![
                action_button("Remove All Tags", Message::RemoveAllPressed, enabled),
                action_button("Show Raw Output", Message::ShowRawPressed, enabled),
                action_button("Clear Form", Message::ClearForm, enabled),
            ]
            .spacing(PAD)
        )
        .center_x(Length::Fill),
    ]
    .spacing(PAD);

    let status_bar = container(text(state.status.as_str()).size(SMALL_TEXT))
        .padding([4, 8])
        .width(Length::Fill)
        .style(container::bordered_box);

    let page = column![file_bar, body, actions, status_bar]
        .spacing(PAD)
        .padding(PAD);

    match &state.dialog {
        Some(d) => dialog::with_modal(page, d),
        None => page.into(),
    }
}
