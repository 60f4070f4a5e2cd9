// SPDX-License-Identifier: MPL-2.0
//! Saving generated images.

use crate::domain::image::EncodedImage;
use image_rs::ImageFormat;
use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

const FILE_PREFIX: &str = "TypoClone";

/// Errors raised while saving a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("could not convert image to PNG: {0}")]
    Encode(String),

    #[error("could not write file: {0}")]
    Io(String),
}

/// Suggested file name for a result rendered from `word`.
///
/// Characters that are not valid in file names on common platforms are
/// replaced with `_`.
#[must_use]
pub fn default_file_name(word: &str) -> String {
    let word = word.trim();
    if word.is_empty() {
        return format!("{FILE_PREFIX}.png");
    }
    let sanitized: String = word
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{FILE_PREFIX}-{sanitized}.png")
}

/// Returns the image as PNG bytes, converting when needed.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] when a non-PNG payload cannot be decoded.
pub fn png_bytes(image: &EncodedImage) -> Result<Cow<'_, [u8]>, ExportError> {
    if image.mime_type() == "image/png" {
        return Ok(Cow::Borrowed(image.bytes()));
    }
    let decoded =
        image_rs::load_from_memory(image.bytes()).map_err(|e| ExportError::Encode(e.to_string()))?;
    let mut png = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(Cow::Owned(png))
}

/// Writes the image to `path` as PNG.
///
/// # Errors
///
/// Returns an [`ExportError`] if conversion or the write fails.
pub async fn save_png(image: EncodedImage, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let bytes = tokio::task::spawn_blocking(move || png_bytes(&image).map(Cow::into_owned))
        .await
        .map_err(|e| ExportError::Encode(e.to_string()))??;
    tokio::fs::write(path.as_ref(), bytes)
        .await
        .map_err(|e| ExportError::Io(e.to_string()))
}
