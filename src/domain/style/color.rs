// SPDX-License-Identifier: MPL-2.0
//! Hex color parsing for swatch previews.

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Parses `#rgb` or `#rrggbb` (the leading `#` is optional).
///
/// Returns `None` for anything else; callers keep the raw text so the
/// service still receives what the user typed.
#[must_use]
pub fn parse_hex_color(input: &str) -> Option<Rgb> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|c| {
                // Short form: each digit is doubled (#f80 -> #ff8800)
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v * 17
            });
            Some(Rgb::new(channels.next()?, channels.next()?, channels.next()?))
        }
        6 => {
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
            Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
        }
        _ => None,
    }
}
