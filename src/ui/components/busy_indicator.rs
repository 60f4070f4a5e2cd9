// SPDX-License-Identifier: MPL-2.0
//! Spinner and caption shown while a request is running.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Full-size overlay with a spinner above `caption`.
pub fn overlay<'a, Message: 'static>(
    caption: String,
    rotation: f32,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::new(colors.brand_primary, rotation).into_element())
        .push(Text::new(caption).size(typography::BODY_SM));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::busy_overlay)
        .into()
}
