// SPDX-License-Identifier: MPL-2.0
//! Components shared by the panels.
//!
//! - [`checkerboard`] - backdrop that makes transparent results visible
//! - [`busy_indicator`] - spinner with a caption over a preview

pub mod busy_indicator;
pub mod checkerboard;
