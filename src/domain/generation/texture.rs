// SPDX-License-Identifier: MPL-2.0
//! Material presets offered as texture overrides.

/// A selectable texture override.
///
/// `id` is the text sent to the service; the empty id means "keep what the
/// analysis detected".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexturePreset {
    pub id: &'static str,
    /// i18n key for the button label.
    pub label_key: &'static str,
    pub glyph: &'static str,
}

impl TexturePreset {
    /// The "auto" preset.
    pub const AUTO: TexturePreset = TexturePreset {
        id: "",
        label_key: "texture-auto",
        glyph: "✨",
    };

    /// Full catalog, auto first.
    pub const CATALOG: [TexturePreset; 8] = [
        TexturePreset::AUTO,
        TexturePreset {
            id: "Liquid Chrome",
            label_key: "texture-chrome",
            glyph: "💿",
        },
        TexturePreset {
            id: "Frosted Glass",
            label_key: "texture-glass",
            glyph: "🧊",
        },
        TexturePreset {
            id: "Brushed Gold Metal",
            label_key: "texture-gold",
            glyph: "📀",
        },
        TexturePreset {
            id: "Neon Plasma",
            label_key: "texture-neon",
            glyph: "🌈",
        },
        TexturePreset {
            id: "Polished Dark Wood",
            label_key: "texture-wood",
            glyph: "🪵",
        },
        TexturePreset {
            id: "Iridescent Liquid",
            label_key: "texture-liquid",
            glyph: "💧",
        },
        TexturePreset {
            id: "Soft Velvet Fabric",
            label_key: "texture-velvet",
            glyph: "🧶",
        },
    ];

    /// Returns whether this preset defers to the analyzed texture.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.id.is_empty()
    }

    /// Finds the preset with the given id.
    #[must_use]
    pub fn find(id: &str) -> Option<TexturePreset> {
        Self::CATALOG.into_iter().find(|preset| preset.id == id)
    }
}
