// SPDX-License-Identifier: MPL-2.0
//! Encoded image payloads.
//!
//! Images travel to and from the remote service in their encoded form
//! (PNG, JPEG, ...). Pixels are never touched here.

use std::sync::Arc;

/// An encoded image plus what is known about it.
///
/// Bytes are shared behind an `Arc` so snapshots handed to background tasks
/// stay cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Arc<Vec<u8>>,
    mime_type: String,
    width: u32,
    height: u32,
    file_name: Option<String>,
}

impl EncodedImage {
    /// Creates a new encoded image.
    #[must_use]
    pub fn new(bytes: Arc<Vec<u8>>, mime_type: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            width,
            height,
            file_name: None,
        }
    }

    /// Attaches the original file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the shared byte buffer.
    #[must_use]
    pub fn bytes_arc(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.bytes)
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
