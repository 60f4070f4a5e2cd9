// SPDX-License-Identifier: MPL-2.0
//! Generation newtypes.

/// Percent bounds shared by every generation slider.
pub mod percent_bounds {
    /// Minimum slider value.
    pub const MIN: u8 = 0;
    /// Maximum slider value.
    pub const MAX: u8 = 100;
}

/// Slider value, guaranteed to be within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percent(u8);

impl Percent {
    /// Creates a new percentage, clamping to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(percent_bounds::MIN, percent_bounds::MAX))
    }

    /// Creates a percentage from a slider position, clamping out-of-range values.
    #[must_use]
    pub fn from_slider(value: i32) -> Self {
        let clamped = value.clamp(
            i32::from(percent_bounds::MIN),
            i32::from(percent_bounds::MAX),
        );
        // Truncation is safe: clamped to 0..=100
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(clamped as u8)
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
