// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Notifier` owns the single live notification. A new notification
//! replaces the current one immediately; nothing is queued. Dismissal, whether
//! manual or automatic, starts the exit animation, and the notification is
//! removed once that animation has played. Every removal is keyed by
//! [`NotificationId`], so a dismissal aimed at a notification that has already
//! been replaced or removed is a no-op.

use super::notification::{Notification, NotificationId};
use crate::app::config::{DEFAULT_EXIT_ANIMATION_MS, DEFAULT_NOTIFICATION_DISPLAY_SECS};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button of a toast was pressed.
    Dismiss(NotificationId),
}

/// Owns the at-most-one visible notification.
#[derive(Debug)]
pub struct Notifier {
    current: Option<Notification>,
    /// How long a toast stays up before it is dismissed automatically.
    display: Duration,
    /// Length of the enter and exit animations.
    animation: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::with_timing(
            Duration::from_secs(DEFAULT_NOTIFICATION_DISPLAY_SECS),
            Duration::from_millis(DEFAULT_EXIT_ANIMATION_MS),
        )
    }
}

impl Notifier {
    /// Creates an empty notifier with the default 5s window and 300ms animation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timing(display: Duration, animation: Duration) -> Self {
        Self {
            current: None,
            display,
            animation,
        }
    }

    /// Shows `notification`, dropping whichever notification was on screen.
    pub fn notify(&mut self, notification: Notification) -> NotificationId {
        if let Some(previous) = self.current.take() {
            tracing::debug!(id = ?previous.id(), "replacing notification");
        }
        let id = notification.id();
        tracing::debug!(
            ?id,
            kind = ?notification.kind(),
            key = notification.message_key(),
            "showing notification"
        );
        self.current = Some(notification);
        id
    }

    /// Starts the exit animation of notification `id`.
    ///
    /// Returns `false` if `id` is not on screen or is already leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        match self.current.as_mut() {
            Some(notification) if notification.id() == id => {
                let started = notification.begin_exit(now);
                if started {
                    tracing::debug!(?id, "dismissing notification");
                }
                started
            }
            _ => false,
        }
    }

    /// Advances timers using the current time.
    pub fn tick(&mut self) -> Option<NotificationId> {
        self.tick_at(Instant::now())
    }

    /// Advances timers to `now`.
    ///
    /// A visible notification whose display window has elapsed starts leaving;
    /// a leaving notification whose animation has finished is removed. Returns
    /// the id of the notification removed by this tick, if any.
    pub fn tick_at(&mut self, now: Instant) -> Option<NotificationId> {
        let notification = self.current.as_mut()?;

        if !notification.is_exiting() && notification.display_elapsed(now, self.display) {
            tracing::debug!(id = ?notification.id(), "display window elapsed");
            notification.begin_exit(now);
        }

        if notification.exit_finished(now, self.animation) {
            let removed = self.current.take().map(|n| n.id());
            tracing::debug!(id = ?removed, "notification removed");
            return removed;
        }

        None
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the notification currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_notification(&self) -> bool {
        self.current.is_some()
    }

    /// Whether an enter or exit animation is in progress at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.current
            .as_ref()
            .is_some_and(|n| n.visibility(now, self.animation) < 1.0 || n.is_exiting())
    }

    /// Fraction of the current toast that is shown at `now`.
    #[must_use]
    pub fn visibility(&self, now: Instant) -> f32 {
        self.current
            .as_ref()
            .map_or(0.0, |n| n.visibility(now, self.animation))
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.display
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        self.animation
    }
}
