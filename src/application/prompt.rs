// SPDX-License-Identifier: MPL-2.0
//! Instructions sent to the remote model.
//!
//! The analysis prompt is fixed. The generation prompt is composed from the
//! analysis and the user's settings, with overrides resolved through
//! [`GenerationSettings::effective`](crate::domain::generation::GenerationSettings::effective).

use super::port::GenerationRequest;
use crate::domain::generation::Percent;

/// Instruction for the style analysis call.
pub const ANALYSIS_PROMPT: &str = "Analyze the 3D typography in this image. \
Describe its visual style precisely so the same style can be applied to a different word. \
Report the font family or closest typeface description, the extrusion depth, \
the lighting type (one of glossy, matte, neon, metallic), the dominant primary color \
and the secondary or accent color as hex values, any glow effect, \
the material and texture details, and the angle of the cast shadow.";

/// Maps a slider value to a descriptive adjective the model understands.
fn level(value: Percent, words: [&'static str; 4]) -> &'static str {
    match value.value() {
        0..=24 => words[0],
        25..=49 => words[1],
        50..=74 => words[2],
        _ => words[3],
    }
}

/// Builds the generation instruction for a request.
#[must_use]
pub fn generation_prompt(request: &GenerationRequest) -> String {
    let analysis = &request.analysis;
    let settings = &request.settings;
    let effective = settings.effective(analysis);

    let depth = level(
        settings.intensity_3d,
        ["very shallow", "moderate", "deep", "extremely deep"],
    );
    let light = level(
        settings.brightness,
        ["dim, moody", "soft", "bright", "brilliant, high-key"],
    );
    let outline = level(
        settings.outline_thickness,
        ["no visible", "a thin", "a medium", "a thick"],
    );

    let word = request.word();
    let background = if settings.is_transparent {
        "Background: fully transparent, no backdrop, no floor, lettering isolated."
    } else {
        "Background: clean studio backdrop that complements the colors."
    };

    [
        format!("Create a high-resolution 3D typography render of the word \"{word}\"."),
        "Clone the exact visual style of the lettering in the reference image; \
         do not copy its text."
            .to_string(),
        format!("Font: {}.", analysis.font_family),
        format!(
            "Extrusion: {depth} (originally {}), 3D intensity {}.",
            analysis.extrusion_depth, settings.intensity_3d
        ),
        format!(
            "Lighting: {light} {} lighting, brightness {}.",
            analysis.lighting_type, settings.brightness
        ),
        format!(
            "Colors: primary {}, secondary {}.",
            effective.primary_color, effective.secondary_color
        ),
        format!("Material and texture: {}.", effective.texture),
        format!("Glow: {}.", analysis.glow_effect),
        format!("Shadow angle: {}.", analysis.shadow_angle),
        format!("Outline: {outline} outline ({}).", settings.outline_thickness),
        background.to_string(),
        format!("Render only the word \"{word}\", centered, with every letter legible."),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::GenerationSettings;
    use crate::domain::image::EncodedImage;
    use crate::domain::style::{LightingType, StyleAnalysis};
    use std::sync::Arc;

    fn request(settings: GenerationSettings) -> GenerationRequest {
        GenerationRequest {
            source_image: EncodedImage::new(Arc::new(vec![0]), "image/png", 1, 1),
            analysis: StyleAnalysis {
                font_family: "Rounded bubble display".to_string(),
                extrusion_depth: "deep".to_string(),
                lighting_type: LightingType::Neon,
                primary_color: "#ff00aa".to_string(),
                secondary_color: "#00e5ff".to_string(),
                glow_effect: "strong outer glow".to_string(),
                texture_details: "glossy plastic".to_string(),
                shadow_angle: "straight down".to_string(),
            },
            settings,
        }
    }

    #[test]
    fn prompt_names_word_and_analysis() {
        let prompt = generation_prompt(&request(GenerationSettings {
            new_word: " Party ".to_string(),
            ..GenerationSettings::default()
        }));
        assert!(prompt.contains("\"Party\""));
        assert!(prompt.contains("Rounded bubble display"));
        assert!(prompt.contains("neon lighting"));
        assert!(prompt.contains("strong outer glow"));
        assert!(prompt.contains("straight down"));
    }

    #[test]
    fn overrides_replace_analyzed_values() {
        let prompt = generation_prompt(&request(GenerationSettings {
            new_word: "GOLD".to_string(),
            custom_primary_color: "#ffd700".to_string(),
            custom_texture: "Brushed Gold Metal".to_string(),
            ..GenerationSettings::default()
        }));
        assert!(prompt.contains("primary #ffd700"));
        assert!(prompt.contains("secondary #00e5ff"));
        assert!(prompt.contains("Brushed Gold Metal"));
        assert!(!prompt.contains("glossy plastic"));
    }

    #[test]
    fn transparency_flag_selects_background() {
        let transparent = generation_prompt(&request(GenerationSettings {
            new_word: "A".to_string(),
            is_transparent: true,
            ..GenerationSettings::default()
        }));
        assert!(transparent.contains("fully transparent"));

        let opaque = generation_prompt(&request(GenerationSettings {
            new_word: "A".to_string(),
            is_transparent: false,
            ..GenerationSettings::default()
        }));
        assert!(opaque.contains("studio backdrop"));
    }

    #[test]
    fn prompt_is_one_instruction_per_line() {
        let prompt = generation_prompt(&request(GenerationSettings {
            new_word: "Velvet".to_string(),
            ..GenerationSettings::default()
        }));
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("Create a high-resolution"));
        assert_eq!(
            lines.last().copied(),
            Some("Render only the word \"Velvet\", centered, with every letter legible.")
        );
        assert!(!prompt.ends_with('\n'));
    }

    #[test]
    fn slider_levels_map_to_adjectives() {
        let words = ["a", "b", "c", "d"];
        assert_eq!(level(Percent::new(0), words), "a");
        assert_eq!(level(Percent::new(30), words), "b");
        assert_eq!(level(Percent::new(74), words), "c");
        assert_eq!(level(Percent::new(100), words), "d");
    }

    #[test]
    fn prompt_reports_slider_values() {
        let prompt = generation_prompt(&request(GenerationSettings {
            new_word: "A".to_string(),
            ..GenerationSettings::default()
        }));
        assert!(prompt.contains("3D intensity 75%"));
        assert!(prompt.contains("brightness 80%"));
        assert!(prompt.contains("(30%)"));
    }
}
