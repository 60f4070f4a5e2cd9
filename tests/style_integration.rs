// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

use iced::widget::button::Status;
use iced::Theme;
use typoclone::ui::design_tokens::{palette, sizing, spacing, typography};
use typoclone::ui::styles::{button, container};
use typoclone::ui::theming::{scheme, ColorScheme, ThemeMode};

#[test]
fn all_styles_are_callable() {
    for theme in [Theme::Light, Theme::Dark] {
        let _ = button::primary(&theme, Status::Active);
        let _ = button::secondary(&theme, Status::Hovered);
        let _ = button::tile(true)(&theme, Status::Pressed);
        let _ = container::panel(&theme);
        let _ = container::preview_frame(&theme);
        let _ = container::busy_overlay(&theme);
        let _ = container::error_banner(&theme);
        let _ = container::swatch(Some(palette::PRIMARY_500))(&theme);
    }
}

#[test]
fn design_tokens_are_ordered() {
    assert!(spacing::XS < spacing::MD);
    assert!(typography::CAPTION < typography::TITLE_LG);
    assert!(sizing::SWATCH < sizing::PREVIEW_HEIGHT);
}

#[test]
fn theming_switches_correctly() {
    let light = ColorScheme::for_mode(ThemeMode::Light);
    let dark = ColorScheme::for_mode(ThemeMode::Dark);

    assert!(light.surface_primary.r > dark.surface_primary.r);
    assert!(light.text_primary.r < dark.text_primary.r);

    assert!(scheme(&ThemeMode::Dark.iced_theme()).surface_primary.r < 0.5);
    assert!(scheme(&ThemeMode::Light.iced_theme()).surface_primary.r > 0.5);
}
