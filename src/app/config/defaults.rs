// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration.
//!
//! Generation defaults live in
//! [`domain::generation`](crate::domain::generation) and are re-exported
//! here so every configurable value can be found in one place.

pub use crate::domain::generation::settings::{
    DEFAULT_BRIGHTNESS, DEFAULT_INTENSITY_3D, DEFAULT_OUTLINE_THICKNESS,
};
pub use crate::infrastructure::gemini::{
    DEFAULT_ANALYSIS_MODEL, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_IMAGE_MODEL,
};

// ==========================================================================
// Request Timeout
// ==========================================================================

/// Default time allowed for one service call (seconds).
///
/// Image generation routinely takes tens of seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;

pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Window
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS < DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS < MAX_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_INTENSITY_3D <= 100);
    assert!(DEFAULT_BRIGHTNESS <= 100);
    assert!(DEFAULT_OUTLINE_THICKNESS <= 100);
};
