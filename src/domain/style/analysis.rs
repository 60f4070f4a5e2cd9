// SPDX-License-Identifier: MPL-2.0
//! Structured description of a source image's typographic appearance.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// LightingType
// =============================================================================

/// Lighting model detected on the source lettering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightingType {
    #[default]
    Glossy,
    Matte,
    Neon,
    Metallic,
}

impl LightingType {
    /// All lighting types, in the order the service schema lists them.
    pub const ALL: [LightingType; 4] = [
        LightingType::Glossy,
        LightingType::Matte,
        LightingType::Neon,
        LightingType::Metallic,
    ];

    /// Returns the lowercase identifier used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LightingType::Glossy => "glossy",
            LightingType::Matte => "matte",
            LightingType::Neon => "neon",
            LightingType::Metallic => "metallic",
        }
    }

    /// Returns the i18n key for the display label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LightingType::Glossy => "lighting-glossy",
            LightingType::Matte => "lighting-matte",
            LightingType::Neon => "lighting-neon",
            LightingType::Metallic => "lighting-metallic",
        }
    }
}

impl fmt::Display for LightingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known lighting types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLightingType(pub String);

impl fmt::Display for UnknownLightingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lighting type: {}", self.0)
    }
}

impl std::error::Error for UnknownLightingType {}

impl FromStr for LightingType {
    type Err = UnknownLightingType;

    /// Parses case-insensitively; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        LightingType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownLightingType(s.to_string()))
    }
}

// =============================================================================
// StyleAnalysis
// =============================================================================

/// Typographic and material appearance of the uploaded lettering.
///
/// Every field except [`lighting_type`](Self::lighting_type) is free text
/// produced by the remote model. Colors are usually `#rrggbb` strings but
/// nothing guarantees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleAnalysis {
    pub font_family: String,
    pub extrusion_depth: String,
    pub lighting_type: LightingType,
    pub primary_color: String,
    pub secondary_color: String,
    pub glow_effect: String,
    pub texture_details: String,
    pub shadow_angle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighting_type_parses_case_insensitively() {
        assert_eq!("Neon".parse::<LightingType>(), Ok(LightingType::Neon));
        assert_eq!(
            " METALLIC ".parse::<LightingType>(),
            Ok(LightingType::Metallic)
        );
    }

    #[test]
    fn lighting_type_rejects_unknown_values() {
        let err = "plastic".parse::<LightingType>().unwrap_err();
        assert_eq!(err, UnknownLightingType("plastic".to_string()));
        assert!(err.to_string().contains("plastic"));
    }

    #[test]
    fn lighting_type_display_matches_wire_name() {
        for kind in LightingType::ALL {
            assert_eq!(kind.to_string().parse::<LightingType>(), Ok(kind));
        }
    }
}
