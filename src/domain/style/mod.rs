// SPDX-License-Identifier: MPL-2.0
//! Style domain types.

pub mod analysis;
pub mod color;

pub use analysis::{LightingType, StyleAnalysis};
pub use color::{parse_hex_color, Rgb};
