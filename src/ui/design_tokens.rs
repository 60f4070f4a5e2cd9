// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! - **palette**: base colors (neutral zinc scale, indigo brand accent)
//! - **opacity**, **spacing**, **sizing**, **typography**
//! - **border**, **radius**, **shadow**

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.035, 0.035, 0.043);
    pub const GRAY_900: Color = Color::from_rgb(0.094, 0.094, 0.106);
    pub const GRAY_800: Color = Color::from_rgb(0.153, 0.153, 0.165);
    pub const GRAY_700: Color = Color::from_rgb(0.247, 0.247, 0.275);
    pub const GRAY_400: Color = Color::from_rgb(0.631, 0.631, 0.667);
    pub const GRAY_200: Color = Color::from_rgb(0.894, 0.894, 0.906);
    pub const GRAY_100: Color = Color::from_rgb(0.957, 0.957, 0.961);

    // Brand accent (indigo)
    pub const PRIMARY_400: Color = Color::from_rgb(0.506, 0.549, 0.973);
    pub const PRIMARY_500: Color = Color::from_rgb(0.388, 0.4, 0.945);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.275, 0.898);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const SWATCH: f32 = 28.0;
    pub const TEXTURE_TILE_WIDTH: f32 = 96.0;
    pub const PANEL_MIN_WIDTH: f32 = 300.0;
    pub const PREVIEW_HEIGHT: f32 = 320.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App title in the header.
    pub const TITLE_LG: f32 = 26.0;

    /// Panel headings.
    pub const TITLE_SM: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Captions and field labels.
    pub const CAPTION: f32 = 11.0;
}

// ============================================================================
// Border, Radius, Shadow
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_accent_is_blue_leaning() {
        assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.r);
    }
}
