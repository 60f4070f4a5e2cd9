// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like HTTP
//! clients and vendor wire formats.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Style analysis and image generation over the Gemini REST API
//!   (implements [`StyleService`])
//!
//! [`StyleService`]: crate::application::port::StyleService

pub mod gemini;

pub use gemini::{GeminiClient, GeminiSettings};
