// SPDX-License-Identifier: MPL-2.0
//! Reading uploaded files into encoded images.
//!
//! The file is read as-is and only its header is decoded to learn the format
//! and size. Formats the remote service does not accept are converted to PNG.

use crate::domain::image::EncodedImage;
use iced::widget::image::Handle;
use image_rs::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Largest file accepted for upload (20 MB).
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// Formats forwarded to the service without conversion.
const PASSTHROUGH_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Errors raised while turning a file into a source image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("could not read file: {0}")]
    Io(String),

    #[error("file is too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("file is empty")]
    Empty,

    #[error("not a recognized image format")]
    UnsupportedFormat,

    #[error("could not decode image: {0}")]
    Decode(String),
}

/// Loads the file at `path` as a source image.
///
/// # Errors
///
/// Returns an [`UploadError`] when the file cannot be read, is too large,
/// or is not a decodable image.
pub async fn load_source_image(path: PathBuf) -> Result<EncodedImage, UploadError> {
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;
    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size: metadata.len(),
            max: MAX_UPLOAD_BYTES,
        });
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;

    let image = tokio::task::spawn_blocking(move || encoded_from_bytes(bytes))
        .await
        .map_err(|e| UploadError::Decode(e.to_string()))??;

    Ok(match file_name(&path) {
        Some(name) => image.with_file_name(name),
        None => image,
    })
}

/// Builds an [`EncodedImage`] from raw file bytes.
///
/// # Errors
///
/// Returns [`UploadError::Empty`], [`UploadError::UnsupportedFormat`] or
/// [`UploadError::Decode`] when the bytes are not a usable image.
pub fn encoded_from_bytes(bytes: Vec<u8>) -> Result<EncodedImage, UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }

    let (format, width, height) = inspect(&bytes)?;

    if PASSTHROUGH_FORMATS.contains(&format) {
        return Ok(EncodedImage::new(
            Arc::new(bytes),
            format.to_mime_type(),
            width,
            height,
        ));
    }

    // GIF, BMP: first frame re-encoded as PNG
    let decoded =
        image_rs::load_from_memory_with_format(&bytes, format).map_err(|e| UploadError::Decode(e.to_string()))?;
    let mut png = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| UploadError::Decode(e.to_string()))?;

    Ok(EncodedImage::new(
        Arc::new(png),
        ImageFormat::Png.to_mime_type(),
        width,
        height,
    ))
}

/// Detects format and dimensions from the image header.
///
/// # Errors
///
/// Returns [`UploadError::UnsupportedFormat`] when the format is unknown and
/// [`UploadError::Decode`] when the header is corrupt.
pub fn inspect(bytes: &[u8]) -> Result<(ImageFormat, u32, u32), UploadError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| UploadError::Io(e.to_string()))?;
    let format = reader.format().ok_or(UploadError::UnsupportedFormat)?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| UploadError::Decode(e.to_string()))?;
    Ok((format, width, height))
}

/// Creates an Iced image handle for previewing an encoded image.
#[must_use]
pub fn preview_handle(image: &EncodedImage) -> Handle {
    Handle::from_bytes(image.bytes().to_vec())
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
}
