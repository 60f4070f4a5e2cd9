// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Each handler mutates the borrowed state in [`UpdateContext`] and returns
//! the follow-up [`Task`]: dialogs, file loading, service calls or writes.

use super::persisted_state::AppState;
use super::{Message, ResultMeta};
use crate::application::port::{ServiceError, StyleService};
use crate::application::session::{
    GenerationTicket, Outcome, Session, UploadTicket, ValidationError,
};
use crate::domain::image::EncodedImage;
use crate::domain::style::StyleAnalysis;
use crate::media::{self, ExportError, UploadError};
use crate::ui::notifications::{self, Notification};
use crate::ui::{personalization_panel, result_panel, source_panel};
use iced::widget::image;
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Notification keys for upload problems share this prefix so a new upload
/// can clear stale ones.
const UPLOAD_NOTIFICATION_PREFIX: &str = "notification-upload-";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub service: &'a Arc<dyn StyleService>,
    pub app_state: &'a mut AppState,
    pub state_dir: Option<&'a Path>,
    pub notifications: &'a mut notifications::Manager,
    pub source_preview: &'a mut Option<image::Handle>,
    pub result_preview: &'a mut Option<image::Handle>,
    pub pending_result: &'a mut Option<ResultMeta>,
    pub result_meta: &'a mut Option<ResultMeta>,
}

impl UpdateContext<'_> {
    /// Writes the persisted state, surfacing a warning on failure.
    fn save_app_state(&mut self) {
        if let Some(key) = self.app_state.save_to(self.state_dir.map(Path::to_path_buf)) {
            self.notifications.push(Notification::warning(key));
        }
    }
}

// =============================================================================
// Panels
// =============================================================================

pub fn handle_source_message(
    ctx: &mut UpdateContext<'_>,
    message: &source_panel::Message,
) -> Task<Message> {
    match source_panel::update(message) {
        source_panel::Event::OpenFileDialog => {
            handle_open_file_dialog(ctx.app_state.last_open_directory.clone())
        }
    }
}

pub fn handle_personalization_message(
    ctx: &mut UpdateContext<'_>,
    message: personalization_panel::Message,
) -> Task<Message> {
    match personalization_panel::update(ctx.session, message) {
        personalization_panel::Event::None => Task::none(),
        personalization_panel::Event::GenerateRequested => start_generation(ctx),
    }
}

pub fn handle_result_message(
    ctx: &mut UpdateContext<'_>,
    message: &result_panel::Message,
) -> Task<Message> {
    match result_panel::update(message) {
        result_panel::Event::SaveRequested => handle_save_requested(ctx),
        result_panel::Event::ErrorDismissed => {
            ctx.session.dismiss_error();
            Task::none()
        }
    }
}

// =============================================================================
// Upload & analysis
// =============================================================================

/// Opens the native file dialog filtered to supported images.
pub fn handle_open_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Images", media::extensions::IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Reads and decodes `path` in the background.
pub fn load_source(path: PathBuf) -> Task<Message> {
    tracing::info!(path = %path.display(), "loading source image");
    let task_path = path.clone();
    Task::perform(media::load_source_image(task_path), move |result| {
        Message::SourceLoaded {
            path: path.clone(),
            result,
        }
    })
}

/// Handles a file dropped on the window.
///
/// Directories and files without an image extension are rejected before
/// reading them.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if path.is_dir() || !media::extensions::is_supported(&path) {
        tracing::info!(path = %path.display(), "ignoring dropped file without image extension");
        ctx.session.fail_upload();
        return Task::none();
    }
    load_source(path)
}

pub fn handle_source_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<EncodedImage, UploadError>,
) -> Task<Message> {
    ctx.notifications.clear_with_prefix(UPLOAD_NOTIFICATION_PREFIX);

    let image = match result {
        Ok(image) => image,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "upload rejected");
            ctx.session.fail_upload();
            if let UploadError::TooLarge { max, .. } = err {
                ctx.notifications.push(
                    Notification::warning("notification-upload-too-large")
                        .with_arg("max", (max / (1024 * 1024)).to_string()),
                );
            }
            return Task::none();
        }
    };

    tracing::info!(
        mime = image.mime_type(),
        width = image.width(),
        height = image.height(),
        bytes = image.len(),
        "starting style analysis"
    );

    ctx.app_state.set_last_open_directory_from_file(&path);
    ctx.save_app_state();

    *ctx.source_preview = Some(media::preview_handle(&image));
    *ctx.result_preview = None;
    *ctx.result_meta = None;

    let ticket = ctx.session.begin_upload(image.clone());
    Task::perform(ctx.service.analyze(image), move |result| {
        Message::AnalysisCompleted { ticket, result }
    })
}

pub fn handle_analysis_completed(
    ctx: &mut UpdateContext<'_>,
    ticket: UploadTicket,
    result: Result<StyleAnalysis, ServiceError>,
) -> Task<Message> {
    let summary = match &result {
        Ok(analysis) => Ok((analysis.font_family.clone(), analysis.lighting_type)),
        Err(err) => Err(err.clone()),
    };
    match (ctx.session.finish_analysis(ticket, result), summary) {
        (Outcome::Applied, Ok((font, lighting))) => {
            tracing::info!(%font, %lighting, "style analysis complete");
        }
        (Outcome::Failed, Err(err)) => tracing::warn!(%err, "style analysis failed"),
        (Outcome::Stale, _) => tracing::debug!("dropping analysis for a replaced upload"),
        _ => {}
    }
    Task::none()
}

// =============================================================================
// Generation
// =============================================================================

fn start_generation(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let (ticket, request) = match ctx.session.begin_generation() {
        Ok(started) => started,
        Err(ValidationError::GenerationInFlight) => {
            tracing::debug!("generation already running");
            return Task::none();
        }
        Err(err) => {
            tracing::info!(%err, "generation rejected");
            return Task::none();
        }
    };

    let effective = request.settings.effective(&request.analysis);
    tracing::info!(
        word = request.word(),
        texture = %effective.texture,
        transparent = request.settings.is_transparent,
        "starting generation"
    );

    *ctx.pending_result = Some(ResultMeta {
        word: request.word().to_string(),
        transparent: request.settings.is_transparent,
    });
    Task::perform(ctx.service.generate(request), move |result| {
        Message::GenerationCompleted { ticket, result }
    })
}

pub fn handle_generation_completed(
    ctx: &mut UpdateContext<'_>,
    ticket: GenerationTicket,
    result: Result<EncodedImage, ServiceError>,
) -> Task<Message> {
    let error = result.as_ref().err().cloned();
    let preview = result.as_ref().ok().map(media::preview_handle);

    match ctx.session.finish_generation(ticket, result) {
        Outcome::Applied => {
            tracing::info!("generation complete");
            *ctx.result_preview = preview;
            *ctx.result_meta = ctx.pending_result.take();
            let word = ctx.result_meta.as_ref().map(|meta| meta.word.clone());
            if ctx.app_state.last_word != word {
                ctx.app_state.last_word = word;
                ctx.save_app_state();
            }
        }
        Outcome::Failed => {
            if let Some(err) = error {
                tracing::warn!(%err, "generation failed");
            }
            *ctx.pending_result = None;
        }
        Outcome::Stale => {
            tracing::debug!("dropping generation for a replaced upload");
            *ctx.pending_result = None;
        }
    }
    Task::none()
}

// =============================================================================
// Saving
// =============================================================================

fn handle_save_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.session.state().result_image.is_none() {
        return Task::none();
    }

    let word = ctx.result_meta.as_ref().map_or("", |meta| meta.word.as_str());
    let file_name = media::default_file_name(word);
    let last_directory = ctx.app_state.last_save_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .add_filter("PNG", &["png"]);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    // Cancelled
    let Some(path) = path else {
        return Task::none();
    };
    let Some(image) = ctx.session.state().result_image.clone() else {
        return Task::none();
    };

    tracing::info!(path = %path.display(), "saving result");
    let task_path = path.clone();
    Task::perform(media::save_png(image, task_path), move |result| {
        Message::ResultSaved {
            path: path.clone(),
            result,
        }
    })
}

pub fn handle_result_saved(
    ctx: &mut UpdateContext<'_>,
    path: &Path,
    result: Result<(), ExportError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            ctx.notifications.push(
                Notification::success("notification-result-saved")
                    .with_arg("path", path.display().to_string()),
            );
            ctx.app_state.set_last_save_directory_from_file(path);
            ctx.save_app_state();
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "could not save result");
            ctx.notifications
                .push(Notification::error("notification-save-error"));
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{GenerationRequest, ServiceFuture};
    use crate::application::session::SessionError;
    use crate::domain::style::LightingType;

    struct Idle;

    impl StyleService for Idle {
        fn analyze(&self, _image: EncodedImage) -> ServiceFuture<StyleAnalysis> {
            Box::pin(async { Err(ServiceError::Timeout) })
        }

        fn generate(&self, _request: GenerationRequest) -> ServiceFuture<EncodedImage> {
            Box::pin(async { Err(ServiceError::Timeout) })
        }
    }

    struct Fixture {
        session: Session,
        service: Arc<dyn StyleService>,
        app_state: AppState,
        dir: tempfile::TempDir,
        notifications: notifications::Manager,
        source_preview: Option<image::Handle>,
        result_preview: Option<image::Handle>,
        pending_result: Option<ResultMeta>,
        result_meta: Option<ResultMeta>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                session: Session::default(),
                service: Arc::new(Idle),
                app_state: AppState::default(),
                dir: tempfile::tempdir().expect("temp dir"),
                notifications: notifications::Manager::new(),
                source_preview: None,
                result_preview: None,
                pending_result: None,
                result_meta: None,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                session: &mut self.session,
                service: &self.service,
                app_state: &mut self.app_state,
                state_dir: Some(self.dir.path()),
                notifications: &mut self.notifications,
                source_preview: &mut self.source_preview,
                result_preview: &mut self.result_preview,
                pending_result: &mut self.pending_result,
                result_meta: &mut self.result_meta,
            }
        }
    }

    fn image(tag: u8) -> EncodedImage {
        EncodedImage::new(Arc::new(vec![tag]), "image/png", 1, 1)
    }

    fn analysis() -> StyleAnalysis {
        StyleAnalysis {
            font_family: "Bold slab".to_string(),
            lighting_type: LightingType::Matte,
            primary_color: "#ff0000".to_string(),
            secondary_color: "#00ff00".to_string(),
            ..StyleAnalysis::default()
        }
    }

    #[test]
    fn too_large_upload_warns_and_keeps_state() {
        let mut fixture = Fixture::new();
        let _ = handle_source_loaded(
            &mut fixture.ctx(),
            PathBuf::from("/tmp/huge.png"),
            Err(UploadError::TooLarge {
                size: 30 * 1024 * 1024,
                max: 20 * 1024 * 1024,
            }),
        );
        assert_eq!(fixture.session.state().error, Some(SessionError::Upload));
        assert!(fixture
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-upload-too-large"));
        assert!(fixture.source_preview.is_none());
    }

    #[test]
    fn successful_upload_remembers_directory() {
        let mut fixture = Fixture::new();
        let _ = handle_source_loaded(
            &mut fixture.ctx(),
            PathBuf::from("/tmp/samples/logo.png"),
            Ok(image(1)),
        );
        assert!(fixture.session.state().is_analyzing);
        assert_eq!(
            fixture.app_state.last_open_directory,
            Some(PathBuf::from("/tmp/samples"))
        );
        assert!(fixture.dir.path().join("state.cbor").exists());
    }

    #[test]
    fn dropped_text_file_is_rejected() {
        let mut fixture = Fixture::new();
        let _ = handle_file_dropped(&mut fixture.ctx(), PathBuf::from("/tmp/notes.txt"));
        assert_eq!(fixture.session.state().error, Some(SessionError::Upload));
    }

    #[test]
    fn generate_records_pending_request() {
        let mut fixture = Fixture::new();
        let ticket = fixture.session.begin_upload(image(1));
        fixture.session.finish_analysis(ticket, Ok(analysis()));
        fixture.session.set_word("  ROCK ".to_string());

        let _ = handle_personalization_message(
            &mut fixture.ctx(),
            personalization_panel::Message::Generate,
        );
        assert!(fixture.session.state().is_generating);
        assert_eq!(
            fixture.pending_result,
            Some(ResultMeta {
                word: "ROCK".to_string(),
                transparent: true,
            })
        );
    }

    #[test]
    fn applied_generation_caches_preview_and_word() {
        let mut fixture = Fixture::new();
        let ticket = fixture.session.begin_upload(image(1));
        fixture.session.finish_analysis(ticket, Ok(analysis()));
        fixture.session.set_word("ROCK".to_string());
        let (ticket, _) = fixture.session.begin_generation().expect("valid request");
        fixture.pending_result = Some(ResultMeta {
            word: "ROCK".to_string(),
            transparent: true,
        });

        let _ = handle_generation_completed(&mut fixture.ctx(), ticket, Ok(image(9)));

        assert!(fixture.result_preview.is_some());
        assert_eq!(
            fixture.result_meta.as_ref().map(|meta| meta.word.as_str()),
            Some("ROCK")
        );
        assert_eq!(fixture.app_state.last_word.as_deref(), Some("ROCK"));
        assert!(fixture.pending_result.is_none());
    }

    #[test]
    fn result_keeps_background_it_was_generated_with() {
        let mut fixture = Fixture::new();
        let ticket = fixture.session.begin_upload(image(1));
        fixture.session.finish_analysis(ticket, Ok(analysis()));
        fixture.session.set_word("GLASS".to_string());
        fixture.session.set_transparent(true);

        let (ticket, request) = fixture.session.begin_generation().expect("valid request");
        fixture.pending_result = Some(ResultMeta {
            word: request.word().to_string(),
            transparent: request.settings.is_transparent,
        });
        let _ = handle_generation_completed(&mut fixture.ctx(), ticket, Ok(image(9)));

        let _ = handle_personalization_message(
            &mut fixture.ctx(),
            personalization_panel::Message::TransparencyToggled(false),
        );
        assert!(!fixture.session.settings().is_transparent);
        assert_eq!(
            fixture.result_meta,
            Some(ResultMeta {
                word: "GLASS".to_string(),
                transparent: true,
            })
        );
    }

    #[test]
    fn failed_generation_keeps_previous_preview() {
        let mut fixture = Fixture::new();
        let ticket = fixture.session.begin_upload(image(1));
        fixture.session.finish_analysis(ticket, Ok(analysis()));
        fixture.session.set_word("ROCK".to_string());
        fixture.result_preview = Some(media::preview_handle(&image(5)));
        let (ticket, _) = fixture.session.begin_generation().expect("valid request");

        let _ = handle_generation_completed(
            &mut fixture.ctx(),
            ticket,
            Err(ServiceError::Status {
                status: 500,
                message: "internal".to_string(),
            }),
        );

        assert!(fixture.result_preview.is_some());
        assert_eq!(
            fixture.session.state().error,
            Some(SessionError::Generation)
        );
    }

    #[test]
    fn save_failure_shows_error_toast() {
        let mut fixture = Fixture::new();
        let _ = handle_result_saved(
            &mut fixture.ctx(),
            Path::new("/nonexistent/out.png"),
            Err(ExportError::Io("denied".to_string())),
        );
        assert!(fixture
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-save-error"));
        assert!(fixture.app_state.last_save_directory.is_none());
    }

    #[test]
    fn dismiss_clears_session_error() {
        let mut fixture = Fixture::new();
        fixture.session.fail_upload();
        let _ = handle_result_message(&mut fixture.ctx(), &result_panel::Message::DismissError);
        assert!(fixture.session.state().error.is_none());
    }
}
