// SPDX-License-Identifier: MPL-2.0
//! User-controlled generation parameters.

use super::newtypes::Percent;
use crate::domain::style::StyleAnalysis;

/// Default 3D intensity slider position.
pub const DEFAULT_INTENSITY_3D: u8 = 75;
/// Default lighting brightness slider position.
pub const DEFAULT_BRIGHTNESS: u8 = 80;
/// Default outline thickness slider position.
pub const DEFAULT_OUTLINE_THICKNESS: u8 = 30;

/// Parameters that tune or override the synthesized output.
///
/// The three `custom_*` fields are overrides: an empty (or whitespace-only)
/// value defers to the analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub new_word: String,
    pub intensity_3d: Percent,
    pub brightness: Percent,
    pub outline_thickness: Percent,
    pub is_transparent: bool,
    pub custom_primary_color: String,
    pub custom_secondary_color: String,
    pub custom_texture: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            new_word: String::new(),
            intensity_3d: Percent::new(DEFAULT_INTENSITY_3D),
            brightness: Percent::new(DEFAULT_BRIGHTNESS),
            outline_thickness: Percent::new(DEFAULT_OUTLINE_THICKNESS),
            is_transparent: true,
            custom_primary_color: String::new(),
            custom_secondary_color: String::new(),
            custom_texture: String::new(),
        }
    }
}

/// Values the generator should actually use after applying overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveStyle {
    pub primary_color: String,
    pub secondary_color: String,
    pub texture: String,
}

impl GenerationSettings {
    /// Returns whether a non-blank target word has been entered.
    #[must_use]
    pub fn has_word(&self) -> bool {
        !self.new_word.trim().is_empty()
    }

    /// Copies the analysis colors into the color overrides.
    pub fn apply_analysis_colors(&mut self, analysis: &StyleAnalysis) {
        self.custom_primary_color.clone_from(&analysis.primary_color);
        self.custom_secondary_color
            .clone_from(&analysis.secondary_color);
    }

    /// Initializes overrides for a freshly analyzed image: colors come from
    /// the analysis and the texture goes back to auto.
    pub fn sync_with_analysis(&mut self, analysis: &StyleAnalysis) {
        self.apply_analysis_colors(analysis);
        self.custom_texture.clear();
    }

    /// Resolves overrides against the analysis.
    #[must_use]
    pub fn effective(&self, analysis: &StyleAnalysis) -> EffectiveStyle {
        EffectiveStyle {
            primary_color: pick(&self.custom_primary_color, &analysis.primary_color),
            secondary_color: pick(&self.custom_secondary_color, &analysis.secondary_color),
            texture: pick(&self.custom_texture, &analysis.texture_details),
        }
    }
}

fn pick(custom: &str, analyzed: &str) -> String {
    let custom = custom.trim();
    if custom.is_empty() {
        analyzed.to_string()
    } else {
        custom.to_string()
    }
}
