// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the rules
//! can be tested without a GUI or a network.
//!
//! # Modules
//!
//! - [`style`]: Style description produced by the remote service
//!   ([`StyleAnalysis`](style::StyleAnalysis), [`LightingType`](style::LightingType))
//!   and color parsing helpers
//! - [`generation`]: User-controlled generation parameters
//!   ([`GenerationSettings`](generation::GenerationSettings),
//!   [`Percent`](generation::Percent), [`TexturePreset`](generation::TexturePreset))
//! - [`image`]: Encoded image payloads exchanged with the service
//!   ([`EncodedImage`](image::EncodedImage))

pub mod generation;
pub mod image;
pub mod style;
