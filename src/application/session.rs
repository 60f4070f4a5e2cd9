// SPDX-License-Identifier: MPL-2.0
//! Session state container.
//!
//! A [`Session`] owns everything the three panels display: the uploaded
//! source image, the derived style analysis, the generated result, the
//! per-operation progress flags, the last error, and the user's
//! [`GenerationSettings`].
//!
//! Remote calls are not made here. The session hands out snapshots
//! ([`UploadTicket`], [`GenerationTicket`] + [`GenerationRequest`]) and
//! receives their outcome, so every transition can be tested without a
//! runtime.
//!
//! # Flow
//!
//! ```text
//! begin_upload ──► finish_analysis ──► begin_generation ──► finish_generation
//!   (reset)          (sync overrides)     (validate)           (store result)
//! ```

use super::port::{GenerationRequest, ServiceError};
use crate::domain::generation::{GenerationSettings, Percent};
use crate::domain::image::EncodedImage;
use crate::domain::style::StyleAnalysis;

// =============================================================================
// Errors
// =============================================================================

/// User-visible failure kinds, each mapped to one localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The uploaded file could not be read or decoded.
    Upload,
    /// The service could not derive a style from the image.
    Analysis,
    /// The service failed to synthesize the new image.
    Generation,
    /// Generation was requested without an image, an analysis or a word.
    Validation,
}

impl SessionError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SessionError::Upload => "error-upload-failed",
            SessionError::Analysis => "error-analysis-failed",
            SessionError::Generation => "error-generation-failed",
            SessionError::Validation => "error-generation-missing-input",
        }
    }
}

/// Reasons a generation request is rejected before any remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no source image uploaded")]
    MissingSourceImage,
    #[error("source image has not been analyzed")]
    MissingAnalysis,
    #[error("target word is empty")]
    MissingWord,
    #[error("a generation is already running")]
    GenerationInFlight,
}

// =============================================================================
// Tickets
// =============================================================================

/// Identifies one upload; analysis results for an older upload are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket(u64);

/// Identifies the upload a generation was started against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

/// How a completed operation was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result updated the session.
    Applied,
    /// The operation failed; the matching error is now set.
    Failed,
    /// The result belonged to a superseded upload and was dropped.
    Stale,
}

// =============================================================================
// SessionState
// =============================================================================

/// Observable state of the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub source_image: Option<EncodedImage>,
    pub analysis: Option<StyleAnalysis>,
    pub result_image: Option<EncodedImage>,
    pub is_analyzing: bool,
    pub is_generating: bool,
    pub error: Option<SessionError>,
}

// =============================================================================
// Session
// =============================================================================

/// State container for one editing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    settings: GenerationSettings,
    upload_seq: u64,
}

impl Session {
    /// Creates a session with the given initial settings.
    #[must_use]
    pub fn new(settings: GenerationSettings) -> Self {
        Self {
            state: SessionState::default(),
            settings,
            upload_seq: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Returns whether the Generate action should be enabled.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.state.is_generating && self.state.source_image.is_some() && self.settings.has_word()
    }

    // -------------------------------------------------------------------------
    // Upload & analysis
    // -------------------------------------------------------------------------

    /// Installs a new source image and marks analysis as running.
    ///
    /// Analysis, result and error are cleared immediately, before the new
    /// analysis completes.
    pub fn begin_upload(&mut self, image: EncodedImage) -> UploadTicket {
        self.upload_seq += 1;
        self.state.source_image = Some(image);
        self.state.analysis = None;
        self.state.result_image = None;
        self.state.error = None;
        self.state.is_analyzing = true;
        UploadTicket(self.upload_seq)
    }

    /// Records that a file could not be turned into a source image.
    ///
    /// The previous image, analysis and result stay untouched.
    pub fn fail_upload(&mut self) {
        self.state.error = Some(SessionError::Upload);
    }

    /// Applies the outcome of an analysis request.
    pub fn finish_analysis(
        &mut self,
        ticket: UploadTicket,
        result: Result<StyleAnalysis, ServiceError>,
    ) -> Outcome {
        if ticket.0 != self.upload_seq {
            return Outcome::Stale;
        }

        self.state.is_analyzing = false;
        match result {
            Ok(analysis) => {
                self.settings.sync_with_analysis(&analysis);
                self.state.analysis = Some(analysis);
                Outcome::Applied
            }
            Err(_) => {
                self.state.error = Some(SessionError::Analysis);
                Outcome::Failed
            }
        }
    }

    // -------------------------------------------------------------------------
    // Generation
    // -------------------------------------------------------------------------

    /// Validates inputs and marks generation as running.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] without starting anything when the
    /// source image, analysis or word is missing, or when a generation is
    /// already running. Missing inputs also set [`SessionError::Validation`].
    pub fn begin_generation(
        &mut self,
    ) -> Result<(GenerationTicket, GenerationRequest), ValidationError> {
        if self.state.is_generating {
            return Err(ValidationError::GenerationInFlight);
        }

        let missing = if self.state.source_image.is_none() {
            Some(ValidationError::MissingSourceImage)
        } else if self.state.analysis.is_none() {
            Some(ValidationError::MissingAnalysis)
        } else if !self.settings.has_word() {
            Some(ValidationError::MissingWord)
        } else {
            None
        };

        if let Some(err) = missing {
            self.state.error = Some(SessionError::Validation);
            return Err(err);
        }

        let (Some(source_image), Some(analysis)) = (
            self.state.source_image.clone(),
            self.state.analysis.clone(),
        ) else {
            return Err(ValidationError::MissingSourceImage);
        };

        self.state.error = None;
        self.state.is_generating = true;
        Ok((
            GenerationTicket(self.upload_seq),
            GenerationRequest {
                source_image,
                analysis,
                settings: self.settings.clone(),
            },
        ))
    }

    /// Applies the outcome of a generation request.
    ///
    /// A failure leaves the previous result in place.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<EncodedImage, ServiceError>,
    ) -> Outcome {
        self.state.is_generating = false;

        if ticket.0 != self.upload_seq {
            return Outcome::Stale;
        }

        match result {
            Ok(image) => {
                self.state.result_image = Some(image);
                Outcome::Applied
            }
            Err(_) => {
                self.state.error = Some(SessionError::Generation);
                Outcome::Failed
            }
        }
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    /// Restores the color overrides to the analyzed colors.
    pub fn reset_colors(&mut self) {
        if let Some(analysis) = &self.state.analysis {
            self.settings.apply_analysis_colors(analysis);
        }
    }

    pub fn set_word(&mut self, word: String) {
        self.settings.new_word = word;
    }

    pub fn set_intensity_3d(&mut self, value: Percent) {
        self.settings.intensity_3d = value;
    }

    pub fn set_brightness(&mut self, value: Percent) {
        self.settings.brightness = value;
    }

    pub fn set_outline_thickness(&mut self, value: Percent) {
        self.settings.outline_thickness = value;
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.settings.is_transparent = transparent;
    }

    pub fn set_primary_color(&mut self, color: String) {
        self.settings.custom_primary_color = color;
    }

    pub fn set_secondary_color(&mut self, color: String) {
        self.settings.custom_secondary_color = color;
    }

    pub fn set_texture(&mut self, texture: String) {
        self.settings.custom_texture = texture;
    }

    /// Clears the current error message.
    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }
}
