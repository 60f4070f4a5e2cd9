// SPDX-License-Identifier: MPL-2.0
//! Labeled 0-100 slider with its current value.

use crate::domain::generation::Percent;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{slider, Column, Row, Space, Text};
use iced::{Element, Length};

/// Builds a caption row (`label ... 75%`) above a slider.
pub fn control_slider<'a, Message: Clone + 'a>(
    label: String,
    value: Percent,
    on_change: impl Fn(i32) -> Message + 'a,
) -> Element<'a, Message> {
    let header = Row::new()
        .push(Text::new(label).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(value.to_string()).size(typography::CAPTION));

    Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(slider(0..=100, i32::from(value.value()), on_change).step(1))
        .into()
}
