// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! At most one toast is on screen at a time; showing a new one replaces the
//! previous one. A toast is dismissed by its close button or automatically
//! once its display window has elapsed, and in both cases plays a short exit
//! animation before it is removed.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, kinds and lifecycle phase
//! - [`manager`] - `Notifier` owning the live notification and its timers
//! - [`toast`] - Toast widget for rendering the live notification
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notification, Notifier};
//!
//! let mut notifier = Notifier::new();
//! notifier.notify(Notification::error("notification-invalid-email"));
//!
//! // In the view, layer the toast above the page
//! let toast_layer = Toast::view_overlay(&notifier, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Message as NotificationMessage, Notifier};
pub use notification::{Kind, Notification, NotificationId, Phase};
pub use toast::Toast;
