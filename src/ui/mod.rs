// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: each panel
//! receives a borrowed `ViewContext`, emits its own `Message`, and turns
//! messages into `Event`s the application reacts to.
//!
//! # Panels
//!
//! - [`source_panel`] - Uploaded sample, analysis progress and findings
//! - [`personalization_panel`] - Target word, overrides and sliders
//! - [`result_panel`] - Generated image, save action and errors
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Checkerboard backdrop, busy overlay
//! - [`widgets`] - Spinner, labeled slider
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod personalization_panel;
pub mod result_panel;
pub mod source_panel;
pub mod styles;
pub mod theming;
pub mod widgets;
