// SPDX-License-Identifier: MPL-2.0
//! `typoclone` extracts the style of 3D lettering from an image and renders
//! a new word in that style, built with the Iced GUI framework.
//!
//! Style analysis and image synthesis are delegated to a remote generative
//! model; this crate manages the session state, composes the requests and
//! presents the results.
//!
//! # Layers
//!
//! - [`domain`] - Style analysis, generation settings and image payloads
//! - [`application`] - The session state machine and the service port
//! - [`infrastructure`] - The Gemini REST adapter
//! - [`media`] - Reading uploads and writing PNG results
//! - [`ui`] and [`app`] - The Iced front end

#![doc(html_root_url = "https://docs.rs/typoclone/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
