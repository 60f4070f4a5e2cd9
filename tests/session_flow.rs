// SPDX-License-Identifier: MPL-2.0
//! Drives a session end to end against a scripted style service.

use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use typoclone::application::port::{GenerationRequest, ServiceError, ServiceFuture, StyleService};
use typoclone::application::prompt::generation_prompt;
use typoclone::application::session::{Outcome, Session, SessionError, ValidationError};
use typoclone::domain::image::EncodedImage;
use typoclone::domain::style::{LightingType, StyleAnalysis};
use typoclone::media;

/// Replays queued answers and records every generation request.
#[derive(Default)]
struct ScriptedService {
    analyses: Mutex<VecDeque<Result<StyleAnalysis, ServiceError>>>,
    results: Mutex<VecDeque<Result<EncodedImage, ServiceError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedService {
    fn with_analysis(self, result: Result<StyleAnalysis, ServiceError>) -> Self {
        self.analyses.lock().expect("lock").push_back(result);
        self
    }

    fn with_result(self, result: Result<EncodedImage, ServiceError>) -> Self {
        self.results.lock().expect("lock").push_back(result);
        self
    }

    fn generation_calls(&self) -> usize {
        self.requests.lock().expect("lock").len()
    }
}

impl StyleService for ScriptedService {
    fn analyze(&self, _image: EncodedImage) -> ServiceFuture<StyleAnalysis> {
        let next = self
            .analyses
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or(Err(ServiceError::EmptyResponse));
        Box::pin(async move { next })
    }

    fn generate(&self, request: GenerationRequest) -> ServiceFuture<EncodedImage> {
        self.requests.lock().expect("lock").push(request);
        let next = self
            .results
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or(Err(ServiceError::EmptyResponse));
        Box::pin(async move { next })
    }
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([200, 40, 40, 255]))
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("encode png");
    bytes
}

fn source() -> EncodedImage {
    media::encoded_from_bytes(png_bytes(8, 4)).expect("valid png")
}

fn chrome_analysis() -> StyleAnalysis {
    StyleAnalysis {
        font_family: "Heavy geometric sans".to_string(),
        extrusion_depth: "deep".to_string(),
        lighting_type: LightingType::Metallic,
        primary_color: "#d4d4d8".to_string(),
        secondary_color: "#3f3f46".to_string(),
        glow_effect: "none".to_string(),
        texture_details: "polished chrome".to_string(),
        shadow_angle: "45 degrees, bottom right".to_string(),
    }
}

#[tokio::test]
async fn upload_analyze_generate_and_save() {
    let result_image = media::encoded_from_bytes(png_bytes(16, 16)).expect("valid png");
    let service = Arc::new(
        ScriptedService::default()
            .with_analysis(Ok(chrome_analysis()))
            .with_result(Ok(result_image.clone())),
    );
    let mut session = Session::default();

    let ticket = session.begin_upload(source());
    let analysis = service.analyze(source()).await;
    assert_eq!(session.finish_analysis(ticket, analysis), Outcome::Applied);
    assert_eq!(session.settings().custom_primary_color, "#d4d4d8");

    session.set_word("FORGE".to_string());
    session.set_texture("Brushed Gold Metal".to_string());
    let (ticket, request) = session.begin_generation().expect("inputs present");

    let prompt = generation_prompt(&request);
    assert!(prompt.contains("\"FORGE\""));
    assert!(prompt.contains("Brushed Gold Metal"));
    assert!(prompt.contains("#d4d4d8"));

    let generated = service.generate(request).await;
    assert_eq!(session.finish_generation(ticket, generated), Outcome::Applied);
    assert_eq!(session.state().result_image, Some(result_image));

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(media::default_file_name("FORGE"));
    let saved = session.state().result_image.clone().expect("result present");
    media::save_png(saved, &path).await.expect("save succeeds");
    assert!(path.ends_with("TypoClone-FORGE.png"));
    assert!(std::fs::metadata(&path).expect("file written").len() > 0);
}

#[tokio::test]
async fn missing_word_never_reaches_the_service() {
    let service = ScriptedService::default().with_analysis(Ok(chrome_analysis()));
    let mut session = Session::default();

    let ticket = session.begin_upload(source());
    let analysis = service.analyze(source()).await;
    session.finish_analysis(ticket, analysis);

    assert_eq!(
        session.begin_generation().unwrap_err(),
        ValidationError::MissingWord
    );
    assert_eq!(service.generation_calls(), 0);
    assert_eq!(session.state().error, Some(SessionError::Validation));
}

#[tokio::test]
async fn analysis_failure_then_retry_with_new_upload() {
    let service = ScriptedService::default()
        .with_analysis(Err(ServiceError::Blocked("SAFETY".to_string())))
        .with_analysis(Ok(chrome_analysis()));
    let mut session = Session::default();

    let first = session.begin_upload(source());
    let failed = service.analyze(source()).await;
    assert_eq!(session.finish_analysis(first, failed), Outcome::Failed);
    assert!(session.state().source_image.is_some());
    assert!(session.state().analysis.is_none());
    assert_eq!(session.state().error, Some(SessionError::Analysis));

    let second = session.begin_upload(source());
    assert!(session.state().error.is_none());
    let analysis = service.analyze(source()).await;
    assert_eq!(session.finish_analysis(second, analysis), Outcome::Applied);
}

#[tokio::test]
async fn generation_failure_keeps_previous_result() {
    let first_result = media::encoded_from_bytes(png_bytes(4, 4)).expect("valid png");
    let service = ScriptedService::default()
        .with_analysis(Ok(chrome_analysis()))
        .with_result(Ok(first_result.clone()))
        .with_result(Err(ServiceError::Status {
            status: 503,
            message: "overloaded".to_string(),
        }));
    let mut session = Session::default();

    let ticket = session.begin_upload(source());
    session.finish_analysis(ticket, service.analyze(source()).await);
    session.set_word("ONE".to_string());

    let (ticket, request) = session.begin_generation().expect("valid");
    session.finish_generation(ticket, service.generate(request).await);

    session.set_word("TWO".to_string());
    let (ticket, request) = session.begin_generation().expect("valid");
    let outcome = session.finish_generation(ticket, service.generate(request).await);

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(session.state().result_image, Some(first_result));
    assert_eq!(session.state().error, Some(SessionError::Generation));
    assert_eq!(service.generation_calls(), 2);
}

#[tokio::test]
async fn late_analysis_for_replaced_upload_is_ignored() {
    let service = ScriptedService::default().with_analysis(Ok(chrome_analysis()));
    let mut session = Session::default();

    let stale = session.begin_upload(source());
    let _current = session.begin_upload(source());
    let analysis = service.analyze(source()).await;

    assert_eq!(session.finish_analysis(stale, analysis), Outcome::Stale);
    assert!(session.state().is_analyzing);
    assert!(session.state().analysis.is_none());
}
