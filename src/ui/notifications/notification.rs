// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Kind` enum and the
//! two-phase lifecycle a notification goes through before removal.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of notification; determines the toast gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Success,
    Error,
}

impl Kind {
    /// Returns the two gradient stops used for the toast background.
    #[must_use]
    pub fn gradient(&self) -> (Color, Color) {
        match self {
            Kind::Success => (palette::SUCCESS_500, palette::SUCCESS_600),
            Kind::Error => (palette::ERROR_500, palette::ERROR_600),
        }
    }
}

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen and accepting dismissal.
    Visible,
    /// Playing the exit animation; removed once it completes.
    Exiting { since: Instant },
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
    phase: Phase,
}

impl Notification {
    /// Creates a new notification with the given kind and message key.
    ///
    /// The `message_key` is resolved through i18n at render time.
    pub fn new(kind: Kind, message_key: impl Into<String>) -> Self {
        Self::new_at(kind, message_key, Instant::now())
    }

    /// Creates a notification with an explicit creation time.
    pub fn new_at(kind: Kind, message_key: impl Into<String>, created_at: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at,
            phase: Phase::Visible,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Success, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Moves the notification into its exit phase.
    ///
    /// Returns `false` if the exit animation was already running.
    pub(super) fn begin_exit(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => {
                self.phase = Phase::Exiting { since: now };
                true
            }
            Phase::Exiting { .. } => false,
        }
    }

    /// Whether the display window has elapsed at `now`.
    #[must_use]
    pub fn display_elapsed(&self, now: Instant, display: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= display
    }

    /// Whether the exit animation has completed at `now`.
    #[must_use]
    pub fn exit_finished(&self, now: Instant, exit: Duration) -> bool {
        match self.phase {
            Phase::Visible => false,
            Phase::Exiting { since } => now.saturating_duration_since(since) >= exit,
        }
    }

    /// Fraction of the toast that is shown, from `0.0` (off screen) to `1.0`.
    ///
    /// Ramps up over `animation` after creation and back down over `animation`
    /// once exiting.
    #[must_use]
    pub fn visibility(&self, now: Instant, animation: Duration) -> f32 {
        if animation.is_zero() {
            return if self.exit_finished(now, animation) { 0.0 } else { 1.0 };
        }
        let total = animation.as_secs_f32();
        match self.phase {
            Phase::Visible => {
                let age = now.saturating_duration_since(self.created_at).as_secs_f32();
                (age / total).clamp(0.0, 1.0)
            }
            Phase::Exiting { since } => {
                let elapsed = now.saturating_duration_since(since).as_secs_f32();
                (1.0 - elapsed / total).clamp(0.0, 1.0)
            }
        }
    }
}
