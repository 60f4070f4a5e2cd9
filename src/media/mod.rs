// SPDX-License-Identifier: MPL-2.0
//! Local image handling.
//!
//! This module turns files picked or dropped by the user into
//! [`EncodedImage`](crate::domain::image::EncodedImage) payloads and writes
//! generated results back to disk.

pub mod encoding;
pub mod export;
pub mod loader;

pub use encoding::to_base64;
pub use export::{default_file_name, save_png, ExportError};
pub use loader::{encoded_from_bytes, load_source_image, preview_handle, UploadError};

/// Supported image extensions.
pub mod extensions {
    /// Extensions offered in the open dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

    /// Returns whether a path has a supported image extension.
    #[must_use]
    pub fn is_supported(path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}
