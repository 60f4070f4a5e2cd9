// SPDX-License-Identifier: MPL-2.0
//! Checkerboard backdrop for images with an alpha channel.

use crate::ui::design_tokens::radius;
use crate::ui::theming::scheme;
use iced::widget::{canvas, Container, Stack};
use iced::{mouse, Color, Element, Length, Rectangle, Theme};

const TILE_SIZE: f32 = 16.0;

/// Tile colors for the active theme, `(base, alternate)`.
fn tile_colors(theme: &Theme) -> (Color, Color) {
    let colors = scheme(theme);
    (colors.surface_secondary, colors.surface_tertiary)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Checkerboard;

impl<Message> canvas::Program<Message> for Checkerboard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let (base, alternate) = tile_colors(theme);
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), base);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (cols, rows) = (
            (bounds.width / TILE_SIZE).ceil().max(1.0) as u32,
            (bounds.height / TILE_SIZE).ceil().max(1.0) as u32,
        );

        for row in 0..rows {
            for col in (row % 2..cols).step_by(2) {
                #[allow(clippy::cast_precision_loss)]
                let origin = iced::Point::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE);
                frame.fill_rectangle(origin, iced::Size::new(TILE_SIZE, TILE_SIZE), alternate);
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Places `content` over a checkerboard.
pub fn wrap<'a, Message: 'a>(content: Container<'a, Message>) -> Element<'a, Message> {
    Stack::new()
        .push(
            Container::new(
                canvas::Canvas::new(Checkerboard)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .style(|_theme: &Theme| iced::widget::container::Style {
                border: iced::Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
        )
        .push(content)
        .into()
}
