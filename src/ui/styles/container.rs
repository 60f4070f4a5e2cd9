// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::scheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface for each of the three workflow panels.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..colors.surface_secondary
        })),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Frame around the source and result previews.
pub fn preview_frame(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(colors.text_secondary),
        ..Default::default()
    }
}

/// Dims a preview while a request is running.
pub fn busy_overlay(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Inline error message below the Generate button.
pub fn error_banner(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.error
        })),
        border: Border {
            color: colors.error,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Color swatch next to a color field.
///
/// `None` draws an empty outlined square for unparseable input.
pub fn swatch(color: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        container::Style {
            background: color.map(Background::Color),
            border: Border {
                color: colors.text_secondary,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}
