// SPDX-License-Identifier: MPL-2.0
//! Remote style service port.
//!
//! This module defines the [`StyleService`] trait: the two operations the
//! application delegates to a generative model.
//!
//! # Design Notes
//!
//! - Futures are boxed and `'static` so they can be handed to `Task::perform`
//! - Inputs are taken by value; [`EncodedImage`] clones share their buffer
//! - The trait is `Send + Sync` so one instance can be shared behind an `Arc`

use crate::domain::generation::GenerationSettings;
use crate::domain::image::EncodedImage;
use crate::domain::style::StyleAnalysis;
use futures_util::future::BoxFuture;

// =============================================================================
// ServiceError
// =============================================================================

/// Errors reported by a [`StyleService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// No API key was configured.
    #[error("no API key found in environment variable {env_var}")]
    MissingApiKey { env_var: String },

    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service did not answer in time.
    #[error("request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The service refused to process the request.
    #[error("request blocked by the service: {0}")]
    Blocked(String),

    /// The response contained no usable content.
    #[error("service returned no usable content")]
    EmptyResponse,

    /// The response content could not be interpreted.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The request itself was invalid.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

// =============================================================================
// GenerationRequest
// =============================================================================

/// Snapshot of everything a generation needs.
///
/// Taken when the user presses Generate, so later edits to the settings do
/// not leak into an in-flight request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub source_image: EncodedImage,
    pub analysis: StyleAnalysis,
    pub settings: GenerationSettings,
}

impl GenerationRequest {
    /// Returns the trimmed target word.
    #[must_use]
    pub fn word(&self) -> &str {
        self.settings.new_word.trim()
    }
}

// =============================================================================
// StyleService Trait
// =============================================================================

/// Boxed future returned by [`StyleService`] operations.
pub type ServiceFuture<T> = BoxFuture<'static, Result<T, ServiceError>>;

/// Port for the remote generative model.
///
/// # Example
///
/// ```ignore
/// use typoclone::application::port::{StyleService, ServiceError};
/// use typoclone::domain::image::EncodedImage;
///
/// async fn describe(service: &impl StyleService, image: EncodedImage) -> Result<String, ServiceError> {
///     let analysis = service.analyze(image).await?;
///     Ok(analysis.font_family)
/// }
/// ```
pub trait StyleService: Send + Sync {
    /// Derives a structured style description from the source image.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the request fails or the service
    /// cannot interpret the image.
    fn analyze(&self, image: EncodedImage) -> ServiceFuture<StyleAnalysis>;

    /// Renders the requested word in the analyzed style.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on service failure or invalid input
    /// (for example an empty target word).
    fn generate(&self, request: GenerationRequest) -> ServiceFuture<EncodedImage>;
}
