// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ServiceError;
use crate::application::session::{GenerationTicket, UploadTicket};
use crate::domain::image::EncodedImage;
use crate::domain::style::StyleAnalysis;
use crate::media::{ExportError, UploadError};
use crate::ui::notifications;
use crate::ui::{personalization_panel, result_panel, source_panel};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// panel messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Source(source_panel::Message),
    Personalization(personalization_panel::Message),
    Result(result_panel::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A picked or dropped file was read and decoded.
    SourceLoaded {
        path: PathBuf,
        result: Result<EncodedImage, UploadError>,
    },
    AnalysisCompleted {
        ticket: UploadTicket,
        result: Result<StyleAnalysis, ServiceError>,
    },
    GenerationCompleted {
        ticket: GenerationTicket,
        result: Result<EncodedImage, ServiceError>,
    },
    /// Result from the save dialog.
    SaveDialogResult(Option<PathBuf>),
    ResultSaved {
        path: PathBuf,
        result: Result<(), ExportError>,
    },
    /// Periodic tick for the spinner and notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path uploaded on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `TYPOCLONE_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TYPOCLONE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
