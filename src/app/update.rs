// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what happened through their `Event` values; the handlers
//! here turn those events into notifications and async tasks.

use super::Message;
use crate::error::Error;
use crate::ui::hero;
use crate::ui::illustration::Illustration;
use crate::ui::notifications::{Notification, Notifier};
use crate::ui::signin::{self, Event as SignInEvent, ValidationError};
use crate::ui::solar_objects::{self, Event as SolarObjectEvent};
use iced::widget::image;
use iced::Task;
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub notifier: &'a mut Notifier,
    pub sign_in: &'a mut signin::State,
    pub hero: &'a mut hero::State,
    pub solar_objects: &'a mut solar_objects::State,
    pub illustration: &'a mut Illustration,
    pub sign_in_latency: Duration,
}

/// Handles sign-in form messages.
pub fn handle_sign_in_message(
    ctx: &mut UpdateContext<'_>,
    message: signin::Message,
) -> Task<Message> {
    match signin::update(ctx.sign_in, message) {
        SignInEvent::None => Task::none(),
        SignInEvent::Rejected(err) => {
            tracing::debug!(reason = %err, "sign-in rejected");
            ctx.notifier.notify(rejection_notification(&err));
            Task::none()
        }
        SignInEvent::SignInStarted => {
            let latency = ctx.sign_in_latency;
            tracing::info!(latency_ms = latency.as_millis() as u64, "sign-in started");
            Task::perform(signin::simulate_round_trip(latency), Message::SignIn)
        }
        SignInEvent::SignedIn => {
            tracing::info!("sign-in completed");
            ctx.notifier
                .notify(Notification::success("notification-signin-success"));
            Task::none()
        }
        SignInEvent::GoogleSignInRequested => {
            ctx.notifier
                .notify(Notification::success("notification-google-signin"));
            Task::none()
        }
    }
}

fn rejection_notification(err: &ValidationError) -> Notification {
    let notification = Notification::error(err.i18n_key());
    match err {
        ValidationError::InvalidEmail => notification,
        ValidationError::PasswordTooShort { min } => {
            notification.with_arg("min", min.to_string())
        }
    }
}

/// Handles hero expand/collapse messages.
pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    if hero::update(ctx.hero, message) {
        // The hero content moves in the layout, so hovered tiles lose track.
        ctx.solar_objects.clear_hover();
    }
    Task::none()
}

/// Handles clicks and hover changes on the solar objects.
pub fn handle_solar_object_message(
    ctx: &mut UpdateContext<'_>,
    message: solar_objects::Message,
    now: Instant,
) -> Task<Message> {
    match solar_objects::update(ctx.solar_objects, message, now) {
        SolarObjectEvent::None => {}
        SolarObjectEvent::ShowMessage(key) => {
            ctx.notifier.notify(Notification::success(key));
        }
    }
    Task::none()
}

/// Swaps in the loaded hero image, or the placeholder if loading failed.
pub fn handle_hero_image_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<image::Handle, Error>,
) -> Task<Message> {
    *ctx.illustration = Illustration::from_load_result(result);
    Task::none()
}

/// Advances toast timers and tile animations.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if let Some(id) = ctx.notifier.tick_at(now) {
        tracing::trace!(?id, "notification removed");
    }
    ctx.solar_objects.tick(now);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::MIN_PASSWORD_LEN;
    use crate::ui::notifications::Kind;
    use crate::ui::solar_objects::SolarObjectKind;

    struct Fixture {
        notifier: Notifier,
        sign_in: signin::State,
        hero: hero::State,
        solar_objects: solar_objects::State,
        illustration: Illustration,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                notifier: Notifier::new(),
                sign_in: signin::State::new(),
                hero: hero::State::new(),
                solar_objects: solar_objects::State::new(),
                illustration: Illustration::Placeholder,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                notifier: &mut self.notifier,
                sign_in: &mut self.sign_in,
                hero: &mut self.hero,
                solar_objects: &mut self.solar_objects,
                illustration: &mut self.illustration,
                sign_in_latency: Duration::from_millis(10),
            }
        }
    }

    fn type_credentials(fixture: &mut Fixture, email: &str, password: &str) {
        let mut ctx = fixture.ctx();
        let _ = handle_sign_in_message(&mut ctx, signin::Message::EmailChanged(email.into()));
        let _ = handle_sign_in_message(
            &mut ctx,
            signin::Message::PasswordChanged(password.into()),
        );
    }

    #[test]
    fn invalid_email_shows_error_toast() {
        let mut fixture = Fixture::new();
        type_credentials(&mut fixture, "not-an-email", "secret123");

        let _ = handle_sign_in_message(&mut fixture.ctx(), signin::Message::Submit);

        let current = fixture.notifier.current().expect("toast expected");
        assert_eq!(current.kind(), Kind::Error);
        assert_eq!(current.message_key(), "notification-invalid-email");
        assert!(!fixture.sign_in.is_busy());
    }

    #[test]
    fn short_password_toast_carries_minimum() {
        let mut fixture = Fixture::new();
        type_credentials(&mut fixture, "user@example.com", "abc");

        let _ = handle_sign_in_message(&mut fixture.ctx(), signin::Message::Submit);

        let current = fixture.notifier.current().expect("toast expected");
        assert_eq!(current.message_key(), "notification-password-too-short");
        assert_eq!(
            current.message_args(),
            &[("min".to_string(), MIN_PASSWORD_LEN.to_string())]
        );
    }

    #[test]
    fn valid_submission_enters_busy_state_without_toast() {
        let mut fixture = Fixture::new();
        type_credentials(&mut fixture, "user@example.com", "secret123");

        let _ = handle_sign_in_message(&mut fixture.ctx(), signin::Message::Submit);

        assert!(fixture.sign_in.is_busy());
        assert!(!fixture.notifier.has_notification());
    }

    #[test]
    fn finished_sign_in_clears_form_and_shows_success() {
        let mut fixture = Fixture::new();
        type_credentials(&mut fixture, "user@example.com", "secret123");
        let _ = handle_sign_in_message(&mut fixture.ctx(), signin::Message::Submit);

        let _ = handle_sign_in_message(&mut fixture.ctx(), signin::Message::SignInFinished);

        assert!(!fixture.sign_in.is_busy());
        assert!(fixture.sign_in.email().is_empty());
        assert!(fixture.sign_in.password().is_empty());
        let current = fixture.notifier.current().expect("toast expected");
        assert_eq!(current.kind(), Kind::Success);
        assert_eq!(current.message_key(), "notification-signin-success");
    }

    #[test]
    fn google_button_shows_success_toast() {
        let mut fixture = Fixture::new();
        let _ = handle_sign_in_message(&mut fixture.ctx(), signin::Message::GoogleSignIn);
        assert_eq!(
            fixture.notifier.current().map(Notification::message_key),
            Some("notification-google-signin")
        );
    }

    #[test]
    fn solar_object_click_replaces_current_toast() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        let _ = handle_solar_object_message(
            &mut fixture.ctx(),
            solar_objects::Message::Pressed(SolarObjectKind::Sun),
            now,
        );
        let first = fixture.notifier.current().map(Notification::id);

        let _ = handle_solar_object_message(
            &mut fixture.ctx(),
            solar_objects::Message::Pressed(SolarObjectKind::Battery),
            now,
        );

        let current = fixture.notifier.current().expect("toast expected");
        assert_ne!(Some(current.id()), first);
        assert_eq!(current.message_key(), SolarObjectKind::Battery.message_key());
    }

    #[test]
    fn escape_only_collapses_expanded_hero() {
        let mut fixture = Fixture::new();
        let _ = handle_hero_message(&mut fixture.ctx(), hero::Message::EscapePressed);
        assert!(!fixture.hero.is_expanded());

        let _ = handle_hero_message(&mut fixture.ctx(), hero::Message::TriggerPressed);
        assert!(fixture.hero.is_expanded());

        let _ = handle_hero_message(&mut fixture.ctx(), hero::Message::EscapePressed);
        assert!(!fixture.hero.is_expanded());
    }

    #[test]
    fn hero_toggle_clears_hovered_tiles() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        let _ = handle_solar_object_message(
            &mut fixture.ctx(),
            solar_objects::Message::Entered(SolarObjectKind::Leaf),
            now,
        );
        let _ = handle_hero_message(&mut fixture.ctx(), hero::Message::TriggerPressed);
        assert!(!fixture.solar_objects.is_hovered(SolarObjectKind::Leaf));

        let _ = handle_solar_object_message(
            &mut fixture.ctx(),
            solar_objects::Message::Entered(SolarObjectKind::Leaf),
            now,
        );
        let _ = handle_hero_message(&mut fixture.ctx(), hero::Message::EscapePressed);
        assert!(!fixture.solar_objects.is_hovered(SolarObjectKind::Leaf));
    }

    #[test]
    fn escape_while_collapsed_keeps_hover() {
        let mut fixture = Fixture::new();
        let _ = handle_solar_object_message(
            &mut fixture.ctx(),
            solar_objects::Message::Entered(SolarObjectKind::Car),
            Instant::now(),
        );
        let _ = handle_hero_message(&mut fixture.ctx(), hero::Message::EscapePressed);
        assert!(fixture.solar_objects.is_hovered(SolarObjectKind::Car));
    }

    #[test]
    fn failed_hero_image_shows_placeholder() {
        let mut fixture = Fixture::new();
        fixture.illustration = Illustration::generated();

        let _ = handle_hero_image_loaded(&mut fixture.ctx(), Err(Error::Io("missing".into())));

        assert!(fixture.illustration.is_placeholder());
    }

    #[test]
    fn tick_removes_toast_after_display_and_animation() {
        let mut fixture = Fixture::new();
        let start = Instant::now();
        fixture
            .notifier
            .notify(Notification::new_at(Kind::Success, "solar-sun", start));

        let display = fixture.notifier.display_duration();
        let animation = fixture.notifier.animation_duration();

        let _ = handle_tick(&mut fixture.ctx(), start + display);
        assert!(fixture.notifier.has_notification());

        let _ = handle_tick(&mut fixture.ctx(), start + display + animation);
        assert!(!fixture.notifier.has_notification());
    }
}
