//! View constants (layout/sizing).

pub(crate) const PAD: f32 = 10.0;
pub(crate) const SPACING: f32 = 8.0;

pub(crate) const LABEL_W: f32 = 190.0;
pub(crate) const DELETE_W: f32 = 80.0;

pub(crate) const TITLE_TEXT: f32 = 16.0;
pub(crate) const SMALL_TEXT: f32 = 12.0;

pub(crate) const DIALOG_W: f32 = 520.0;
pub(crate) const RAW_DIALOG_W: f32 = 640.0;
pub(crate) const RAW_DIALOG_H: f32 = 420.0;

/// Success line ("... - Tags saved successfully!").
pub(crate) const SUCCESS_GREEN: iced::Color = iced::Color::from_rgb(0.1, 0.55, 0.2);
