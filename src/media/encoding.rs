// SPDX-License-Identifier: MPL-2.0
//! Text form of an encoded image for JSON request bodies.

use crate::domain::image::EncodedImage;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Standard base64 of the encoded bytes.
#[must_use]
pub fn to_base64(image: &EncodedImage) -> String {
    STANDARD.encode(image.bytes())
}
