// SPDX-License-Identifier: MPL-2.0
//! Generation domain types.
//!
//! User-adjustable parameters for synthesizing a new word in the analyzed
//! style, and the rules deciding which value wins when the user overrides
//! what the analysis detected.

pub mod newtypes;
pub mod settings;
pub mod texture;

pub use newtypes::Percent;
pub use settings::{EffectiveStyle, GenerationSettings};
pub use texture::TexturePreset;
