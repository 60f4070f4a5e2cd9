// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short, non-blocking messages for saves, config problems and failed
//! requests. At most three toasts are visible; the rest wait in a queue.
//! Success and info toasts dismiss themselves after 3 s, warnings after 5 s,
//! errors stay until dismissed.
//!
//! ```ignore
//! manager.push(Notification::success("notification-result-saved").with_arg("path", path));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
