// SPDX-License-Identifier: MPL-2.0
//! Port definitions (hexagonal architecture).
//!
//! Ports describe what the application needs from the outside world without
//! saying how it is provided. Adapters live in [`crate::infrastructure`].

pub mod style_service;

pub use style_service::{GenerationRequest, ServiceError, ServiceFuture, StyleService};
