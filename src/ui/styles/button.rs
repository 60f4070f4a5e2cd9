// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::scheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (Generate, Save).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let base = button::Style {
        background: Some(Background::Color(colors.brand_primary)),
        text_color: palette::WHITE,
        border: Border {
            color: colors.brand_secondary,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            shadow: shadow::MD,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand_secondary)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(colors.surface_tertiary)),
            text_color: colors.text_secondary,
            border: Border {
                color: colors.surface_tertiary,
                ..base.border
            },
            ..base
        },
    }
}

/// Quiet action (Choose image, Reset Colors).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(colors.surface_tertiary)),
        button::Status::Active | button::Status::Disabled => None,
    };
    let text_color = if status == button::Status::Disabled {
        colors.text_secondary
    } else {
        colors.text_primary
    };
    button::Style {
        background,
        text_color,
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Tile of the texture grid; `selected` gets the brand outline.
pub fn tile(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let border_color = if selected {
            colors.brand_primary
        } else {
            colors.surface_tertiary
        };
        let background = match (selected, status) {
            (true, _) => Color {
                a: 0.15,
                ..colors.brand_primary
            },
            (false, button::Status::Hovered) => colors.surface_tertiary,
            _ => colors.surface_primary,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.text_primary,
            border: Border {
                color: border_color,
                width: if selected { border::WIDTH_MD } else { border::WIDTH_SM },
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}
