// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod control_slider;

pub use animated_spinner::AnimatedSpinner;
pub use control_slider::control_slider;
