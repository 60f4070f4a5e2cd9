// SPDX-License-Identifier: MPL-2.0
//! Localization using Fluent.
//!
//! Translation files are embedded from `assets/i18n/*.ftl`. The locale is
//! resolved from the `--lang` flag, then `[general] language`, then the OS
//! locale, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
