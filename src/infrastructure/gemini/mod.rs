// SPDX-License-Identifier: MPL-2.0
//! Gemini adapter for the [`StyleService`] port.
//!
//! Both operations use the `generateContent` REST endpoint:
//!
//! - analysis sends the source image with a fixed instruction and a JSON
//!   response schema, then maps the returned object to a [`StyleAnalysis`]
//! - generation sends the source image with the composed prompt and reads the
//!   first inline image part of the answer
//!
//! Response interpretation lives in pure functions ([`parse_analysis`],
//! [`extract_image`]) so it can be tested without a network.

pub mod wire;

use crate::application::port::{GenerationRequest, ServiceError, ServiceFuture, StyleService};
use crate::application::prompt::{generation_prompt, ANALYSIS_PROMPT};
use crate::domain::image::EncodedImage;
use crate::domain::style::{LightingType, StyleAnalysis};
use crate::media::{loader, to_base64};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::sync::Arc;
use std::time::Duration;
use wire::{
    AnalysisPayload, Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part,
};

/// Default REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model for style analysis.
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-2.5-flash";

/// Default model for image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

const USER_AGENT: &str = concat!("TypoClone/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub endpoint: String,
    pub analysis_model: String,
    pub image_model: String,
    /// Resolved key. `None` makes every call fail with
    /// [`ServiceError::MissingApiKey`].
    pub api_key: Option<String>,
    /// Variable the key was read from, reported in errors.
    pub api_key_env: String,
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            analysis_model: DEFAULT_ANALYSIS_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl GeminiSettings {
    /// Reads the API key from the configured environment variable.
    ///
    /// Blank values are treated as unset.
    #[must_use]
    pub fn with_key_from_env(mut self) -> Self {
        self.api_key = std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }

    fn url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            model
        )
    }
}

/// HTTP client for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    settings: Arc<GeminiSettings>,
}

impl GeminiClient {
    /// Creates a client with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] if the HTTP client cannot be built.
    pub fn new(settings: GeminiSettings) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            settings: Arc::new(settings),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }
}

impl StyleService for GeminiClient {
    fn analyze(&self, image: EncodedImage) -> ServiceFuture<StyleAnalysis> {
        let http = self.http.clone();
        let settings = Arc::clone(&self.settings);
        Box::pin(async move {
            let body = GenerateContentRequest {
                contents: vec![Content {
                    role: Some("user".to_string()),
                    parts: vec![image_part(&image), Part::text(ANALYSIS_PROMPT)],
                }],
                generation_config: Some(GenerationConfig {
                    response_mime_type: Some("application/json".to_string()),
                    response_schema: Some(wire::analysis_schema()),
                    response_modalities: None,
                }),
            };
            tracing::info!(
                model = %settings.analysis_model,
                bytes = image.len(),
                mime = image.mime_type(),
                "requesting style analysis"
            );
            let response = send(&http, &settings, &settings.analysis_model, &body).await?;
            let analysis = parse_analysis(&response)?;
            tracing::debug!(?analysis, "style analysis received");
            Ok(analysis)
        })
    }

    fn generate(&self, request: GenerationRequest) -> ServiceFuture<EncodedImage> {
        let http = self.http.clone();
        let settings = Arc::clone(&self.settings);
        Box::pin(async move {
            if request.word().is_empty() {
                return Err(ServiceError::InvalidInput("target word is empty".to_string()));
            }
            let prompt = generation_prompt(&request);
            let body = GenerateContentRequest {
                contents: vec![Content {
                    role: Some("user".to_string()),
                    parts: vec![image_part(&request.source_image), Part::text(prompt)],
                }],
                generation_config: Some(GenerationConfig {
                    response_modalities: Some(vec!["IMAGE".to_string(), "TEXT".to_string()]),
                    ..GenerationConfig::default()
                }),
            };
            tracing::info!(
                model = %settings.image_model,
                word = request.word(),
                "requesting generation"
            );
            let response = send(&http, &settings, &settings.image_model, &body).await?;
            let image = extract_image(&response)?;
            tracing::info!(
                width = image.width(),
                height = image.height(),
                bytes = image.len(),
                "generation received"
            );
            Ok(image)
        })
    }
}

fn image_part(image: &EncodedImage) -> Part {
    Part::inline(image.mime_type(), to_base64(image))
}

async fn send(
    http: &reqwest::Client,
    settings: &GeminiSettings,
    model: &str,
    body: &GenerateContentRequest,
) -> Result<GenerateContentResponse, ServiceError> {
    let api_key = settings
        .api_key
        .as_deref()
        .ok_or_else(|| ServiceError::MissingApiKey {
            env_var: settings.api_key_env.clone(),
        })?;

    let response = http
        .post(settings.url(model))
        .header("x-goog-api-key", api_key)
        .json(body)
        .send()
        .await
        .map_err(map_transport)?;

    let status = response.status();
    let text = response.text().await.map_err(map_transport)?;

    if !status.is_success() {
        let message = error_message(&text).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
        tracing::warn!(status = status.as_u16(), %message, "service returned an error");
        return Err(ServiceError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&text).map_err(|e| ServiceError::MalformedResponse(e.to_string()))
}

fn map_transport(error: reqwest::Error) -> ServiceError {
    if error.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Transport(error.to_string())
    }
}

/// Extracts the message from an error body, falling back to its status code
/// name (`RESOURCE_EXHAUSTED`, ...).
fn error_message(body: &str) -> Option<String> {
    let ErrorEnvelope { error } = serde_json::from_str::<ErrorEnvelope>(body).ok()?;
    if error.message.is_empty() {
        error.status.filter(|status| !status.is_empty())
    } else {
        Some(error.message)
    }
}

fn check_blocked(response: &GenerateContentResponse) -> Result<(), ServiceError> {
    if let Some(reason) = response.block_reason() {
        return Err(ServiceError::Blocked(reason.to_string()));
    }
    let finish = response
        .candidates
        .first()
        .and_then(|c| c.finish_reason.as_deref());
    if response.first_parts().next().is_none() {
        if let Some(reason @ ("SAFETY" | "PROHIBITED_CONTENT" | "IMAGE_SAFETY" | "RECITATION")) =
            finish
        {
            return Err(ServiceError::Blocked(reason.to_string()));
        }
    }
    Ok(())
}

/// Strips a Markdown code fence the model sometimes wraps JSON in.
fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Maps an analysis response to a [`StyleAnalysis`].
///
/// An unrecognized lighting type falls back to [`LightingType::Glossy`].
///
/// # Errors
///
/// Returns [`ServiceError::Blocked`], [`ServiceError::EmptyResponse`] or
/// [`ServiceError::MalformedResponse`].
pub fn parse_analysis(response: &GenerateContentResponse) -> Result<StyleAnalysis, ServiceError> {
    check_blocked(response)?;

    let text: String = response
        .first_parts()
        .filter_map(|part| part.text.as_deref())
        .collect();
    if text.trim().is_empty() {
        return Err(ServiceError::EmptyResponse);
    }

    let payload: AnalysisPayload = serde_json::from_str(strip_fence(&text))
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

    let lighting_type = payload.lighting_type.parse().unwrap_or_else(|_| {
        tracing::warn!(value = %payload.lighting_type, "unknown lighting type, using glossy");
        LightingType::Glossy
    });

    Ok(StyleAnalysis {
        font_family: payload.font_family,
        extrusion_depth: payload.extrusion_depth,
        lighting_type,
        primary_color: payload.primary_color,
        secondary_color: payload.secondary_color,
        glow_effect: payload.glow_effect,
        texture_details: payload.texture_details,
        shadow_angle: payload.shadow_angle,
    })
}

/// Returns the first inline image of a generation response.
///
/// # Errors
///
/// Returns [`ServiceError::Blocked`] or [`ServiceError::EmptyResponse`] when
/// no image was produced, and [`ServiceError::MalformedResponse`] when the
/// payload is not a decodable image.
pub fn extract_image(response: &GenerateContentResponse) -> Result<EncodedImage, ServiceError> {
    check_blocked(response)?;

    let Some(data) = response
        .first_parts()
        .filter_map(|part| part.inline_data.as_ref())
        .find(|data| data.mime_type.starts_with("image/"))
    else {
        if let Some(text) = response.first_parts().find_map(|part| part.text.as_deref()) {
            tracing::warn!(%text, "model answered with text only");
        }
        return Err(ServiceError::EmptyResponse);
    };

    let bytes = STANDARD
        .decode(data.data.as_bytes())
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
    let (format, width, height) =
        loader::inspect(&bytes).map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

    Ok(EncodedImage::new(
        Arc::new(bytes),
        format.to_mime_type(),
        width,
        height,
    ))
}
