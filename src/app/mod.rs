// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the upload, analysis and
//! generation flow.
//!
//! The `App` struct wires together the session, the style service, the
//! localization and the persisted preferences, and translates messages into
//! side effects like file dialogs, remote requests or state persistence.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{GenerationRequest, ServiceError, ServiceFuture, StyleService};
use crate::application::session::Session;
use crate::domain::image::EncodedImage;
use crate::domain::style::StyleAnalysis;
use crate::i18n::I18n;
use crate::infrastructure::GeminiClient;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    service: Arc<dyn StyleService>,
    theme_mode: ThemeMode,
    /// Resolved once at startup; `System` is not re-queried every frame.
    theme: Theme,
    /// Persisted application state (last directories, last word).
    app_state: persisted_state::AppState,
    /// Where `state.cbor` is written; `None` resolves the data directory.
    state_dir: Option<PathBuf>,
    notifications: notifications::Manager,
    /// Handles are cached so the renderer keeps its texture between frames.
    source_preview: Option<image::Handle>,
    result_preview: Option<image::Handle>,
    /// Request in flight, and the one behind the result on screen.
    pending_result: Option<ResultMeta>,
    result_meta: Option<ResultMeta>,
    spinner_rotation: f32,
}

/// What a generated image was requested with.
///
/// The settings may change after a generation; the result keeps its own
/// word for the file name and its own background for the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMeta {
    pub word: String,
    pub transparent: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("state", self.session.state())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires `Fn` for boot, flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Stand-in used when the HTTP client cannot be created; every call
/// reports the construction error.
struct UnavailableService(ServiceError);

impl StyleService for UnavailableService {
    fn analyze(&self, _image: EncodedImage) -> ServiceFuture<StyleAnalysis> {
        let error = self.0.clone();
        Box::pin(async move { Err(error) })
    }

    fn generate(&self, _request: GenerationRequest) -> ServiceFuture<EncodedImage> {
        let error = self.0.clone();
        Box::pin(async move { Err(error) })
    }
}

impl App {
    /// Assembles an application around an already built service.
    pub fn with_service(
        i18n: I18n,
        session: Session,
        service: Arc<dyn StyleService>,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            i18n,
            session,
            service,
            theme_mode,
            theme: theme_mode.iced_theme(),
            app_state: persisted_state::AppState::default(),
            state_dir: None,
            notifications: notifications::Manager::new(),
            source_preview: None,
            result_preview: None,
            pending_result: None,
            result_meta: None,
            spinner_rotation: 0.0,
        }
    }

    /// Loads config and state, builds the service client and optionally
    /// starts uploading the file given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.as_deref(), config.general.language.as_deref());

        let mut session = Session::new(config.generation.initial_settings());
        let (app_state, state_warning) = persisted_state::AppState::load();
        if let Some(word) = &app_state.last_word {
            session.set_word(word.clone());
        }

        let gemini_settings = config.service.to_gemini_settings().with_key_from_env();
        let missing_key_env = gemini_settings
            .api_key
            .is_none()
            .then(|| gemini_settings.api_key_env.clone());

        let service: Arc<dyn StyleService> = match GeminiClient::new(gemini_settings) {
            Ok(client) => {
                tracing::info!(
                    analysis_model = %client.settings().analysis_model,
                    image_model = %client.settings().image_model,
                    "style service ready"
                );
                Arc::new(client)
            }
            Err(err) => {
                tracing::error!(%err, "could not create the style service client");
                Arc::new(UnavailableService(err))
            }
        };

        let mut app = Self::with_service(i18n, session, service, config.general.theme_mode);
        app.app_state = app_state;

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(env_var) = missing_key_env {
            tracing::warn!(%env_var, "no API key configured");
            app.notifications
                .push(Notification::warning("notification-api-key-missing").with_arg("var", env_var));
        }

        let task = match flags.file_path {
            Some(path) => update::load_source(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self
            .session
            .state()
            .source_image
            .as_ref()
            .and_then(EncodedImage::file_name)
        {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn is_busy(&self) -> bool {
        let state = self.session.state();
        state.is_analyzing || state.is_generating
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.is_busy(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            service: &self.service,
            app_state: &mut self.app_state,
            state_dir: self.state_dir.as_deref(),
            notifications: &mut self.notifications,
            source_preview: &mut self.source_preview,
            result_preview: &mut self.result_preview,
            pending_result: &mut self.pending_result,
            result_meta: &mut self.result_meta,
        };

        match message {
            Message::Source(source_message) => {
                update::handle_source_message(&mut ctx, &source_message)
            }
            Message::Personalization(panel_message) => {
                update::handle_personalization_message(&mut ctx, panel_message)
            }
            Message::Result(result_message) => {
                update::handle_result_message(&mut ctx, &result_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenFileDialogResult(path) => match path {
                Some(path) => update::load_source(path),
                None => Task::none(),
            },
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::SourceLoaded { path, result } => {
                update::handle_source_loaded(&mut ctx, path, result)
            }
            Message::AnalysisCompleted { ticket, result } => {
                update::handle_analysis_completed(&mut ctx, ticket, result)
            }
            Message::GenerationCompleted { ticket, result } => {
                update::handle_generation_completed(&mut ctx, ticket, result)
            }
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(&mut ctx, path),
            Message::ResultSaved { path, result } => {
                update::handle_result_saved(&mut ctx, &path, result)
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                if self.is_busy() {
                    self.spinner_rotation =
                        crate::ui::widgets::animated_spinner::advance(self.spinner_rotation);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            notifications: &self.notifications,
            source_preview: self.source_preview.as_ref(),
            result_preview: self.result_preview.as_ref(),
            result_meta: self.result_meta.as_ref(),
            spinner_rotation: self.spinner_rotation,
            theme: &self.theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::SessionError;
    use crate::ui::personalization_panel;
    use std::time::Instant;

    struct NeverCalled;

    impl StyleService for NeverCalled {
        fn analyze(&self, _image: EncodedImage) -> ServiceFuture<StyleAnalysis> {
            Box::pin(async { Err(ServiceError::EmptyResponse) })
        }

        fn generate(&self, _request: GenerationRequest) -> ServiceFuture<EncodedImage> {
            Box::pin(async { Err(ServiceError::EmptyResponse) })
        }
    }

    fn app(state_dir: &tempfile::TempDir) -> App {
        let mut app = App::with_service(
            I18n::new(Some("en-US"), None),
            Session::default(),
            Arc::new(NeverCalled),
            ThemeMode::Dark,
        );
        app.state_dir = Some(state_dir.path().to_path_buf());
        app
    }

    fn png() -> EncodedImage {
        let mut bytes = Vec::new();
        image_rs::RgbaImage::new(2, 2)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        EncodedImage::new(Arc::new(bytes), "image/png", 2, 2).with_file_name("logo.png")
    }

    #[test]
    fn title_includes_source_file_name() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app(&dir);
        assert_eq!(app.title(), "TypoClone 3D");

        let _ = app.update(Message::SourceLoaded {
            path: PathBuf::from("/tmp/logo.png"),
            result: Ok(png()),
        });
        assert_eq!(app.title(), "logo.png - TypoClone 3D");
        assert!(app.session.state().is_analyzing);
        assert!(app.source_preview.is_some());
    }

    #[test]
    fn failed_upload_keeps_previous_source() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app(&dir);
        let _ = app.update(Message::SourceLoaded {
            path: PathBuf::from("/tmp/logo.png"),
            result: Ok(png()),
        });
        let _ = app.update(Message::SourceLoaded {
            path: PathBuf::from("/tmp/notes.txt"),
            result: Err(crate::media::UploadError::UnsupportedFormat),
        });
        assert!(app.session.state().source_image.is_some());
        assert_eq!(app.session.state().error, Some(SessionError::Upload));
    }

    #[test]
    fn generate_without_input_sets_validation_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app(&dir);
        let _ = app.update(Message::Personalization(personalization_panel::Message::Generate));
        assert_eq!(app.session.state().error, Some(SessionError::Validation));
        assert!(!app.session.state().is_generating);
    }

    #[test]
    fn tick_spins_only_while_busy() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app(&dir);
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.spinner_rotation.abs() < f32::EPSILON);

        let _ = app.update(Message::SourceLoaded {
            path: PathBuf::from("/tmp/logo.png"),
            result: Ok(png()),
        });
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.spinner_rotation > 0.0);
    }
}
