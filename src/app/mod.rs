// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the landing page
//! components.
//!
//! The `App` struct wires together the sign-in form, the expandable hero, the
//! solar objects and the toast notifier, and translates component events into
//! side effects like notifications or delayed tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::hero;
use crate::ui::illustration::{self, Illustration};
use crate::ui::notifications::{Notification, Notifier};
use crate::ui::signin;
use crate::ui::solar_objects;
use crate::ui::theming::ThemeMode;
use iced::widget::svg;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    notifier: Notifier,
    sign_in: signin::State,
    hero: hero::State,
    solar_objects: solar_objects::State,
    illustration: Illustration,
    /// Sun artwork shown next to the brand name.
    brand_icon: svg::Handle,
    /// Delay before a valid sign-in completes.
    sign_in_latency: Duration,
    /// Last known window size, used to clamp the expanded hero.
    window_size: Option<Size>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("expand_state", &self.hero.expand_state())
            .field("sign_in_busy", &self.sign_in.is_busy())
            .field("has_notification", &self.notifier.has_notification())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            notifier: Notifier::new(),
            sign_in: signin::State::new(),
            hero: hero::State::new(),
            solar_objects: solar_objects::State::new(),
            illustration: Illustration::generated(),
            brand_icon: svg::Handle::from_memory(illustration::sun_svg().into_bytes()),
            sign_in_latency: Duration::from_millis(config::DEFAULT_SIMULATED_LATENCY_MS),
            window_size: None,
        }
    }
}

impl App {
    /// Initializes application state from the CLI flags and the persisted
    /// configuration, and starts loading the hero image if one is configured.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: &config::Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, flags.i18n_dir, config);
        tracing::info!(locale = %i18n.current_locale(), "starting");

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            notifier: Notifier::with_timing(
                config.notifications.display_duration(),
                config.notifications.exit_duration(),
            ),
            sign_in_latency: config.sign_in.simulated_latency(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifier.notify(Notification::error(key));
        }

        let task = match config.display.hero_image.clone() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading hero image");
                Task::perform(illustration::load_hero_image(path), Message::HeroImageLoaded)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.hero.is_expanded() {
            self.i18n
                .tr_with_args("window-title-expanded", &[("app", app_name.as_str())])
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating =
            self.notifier.is_animating(Instant::now()) || self.solar_objects.is_animating();
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifier.has_notification(), animating);

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            notifier: &mut self.notifier,
            sign_in: &mut self.sign_in,
            hero: &mut self.hero,
            solar_objects: &mut self.solar_objects,
            illustration: &mut self.illustration,
            sign_in_latency: self.sign_in_latency,
        };

        match message {
            Message::SignIn(sign_in_message) => {
                update::handle_sign_in_message(&mut ctx, sign_in_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::SolarObject(object_message) => {
                update::handle_solar_object_message(&mut ctx, object_message, Instant::now())
            }
            Message::Notification(notification_message) => {
                self.notifier.handle_message(&notification_message);
                Task::none()
            }
            Message::HeroImageLoaded(result) => update::handle_hero_image_loaded(&mut ctx, result),
            Message::WindowResized(size) => {
                self.window_size = Some(size);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifier: &self.notifier,
            sign_in: &self.sign_in,
            hero: &self.hero,
            solar_objects: &self.solar_objects,
            illustration: &self.illustration,
            brand_icon: &self.brand_icon,
            window_size: self.window_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;
    use std::path::PathBuf;

    fn english_flags() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    fn english_app() -> App {
        let (app, _task) = App::with_config(english_flags(), &config::Config::default(), None);
        app
    }

    #[test]
    fn starts_collapsed_without_notification() {
        let app = english_app();
        assert!(!app.hero.is_expanded());
        assert!(!app.notifier.has_notification());
        assert!(!app.sign_in.is_busy());
    }

    #[test]
    fn config_warning_is_shown_as_error_toast() {
        let (app, _task) = App::with_config(
            english_flags(),
            &config::Config::default(),
            Some("notification-config-load-error".to_string()),
        );
        let current = app.notifier.current().expect("warning toast expected");
        assert_eq!(current.kind(), Kind::Error);
        assert_eq!(current.message_key(), "notification-config-load-error");
    }

    #[test]
    fn config_timings_are_applied() {
        let mut config = config::Config::default();
        config.notifications.display_secs = Some(8);
        config.notifications.exit_animation_ms = Some(500);
        config.sign_in.simulated_latency_ms = Some(750);

        let (app, _task) = App::with_config(english_flags(), &config, None);

        assert_eq!(app.notifier.display_duration(), Duration::from_secs(8));
        assert_eq!(app.notifier.animation_duration(), Duration::from_millis(500));
        assert_eq!(app.sign_in_latency, Duration::from_millis(750));
    }

    #[test]
    fn configured_theme_mode_is_used() {
        let mut config = config::Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        let (app, _task) = App::with_config(english_flags(), &config, None);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn hero_image_path_keeps_generated_art_until_loaded() {
        let mut config = config::Config::default();
        config.display.hero_image = Some(PathBuf::from("/does/not/exist.png"));
        let (app, _task) = App::with_config(english_flags(), &config, None);
        assert!(!app.illustration.is_placeholder());
    }

    #[test]
    fn title_reflects_expand_state() {
        let mut app = english_app();
        assert_eq!(app.title(), "SOLARSHARE");

        let _ = app.update(Message::Hero(hero::Message::TriggerPressed));
        assert_eq!(app.title(), "SOLARSHARE · Expanded view");

        let _ = app.update(Message::Hero(hero::Message::OverlayPressed));
        assert_eq!(app.title(), "SOLARSHARE");
    }

    #[test]
    fn escape_collapses_expanded_hero() {
        let mut app = english_app();
        let _ = app.update(Message::Hero(hero::Message::TriggerPressed));
        assert!(app.hero.shows_overlay());

        let _ = app.update(Message::Hero(hero::Message::EscapePressed));
        assert!(!app.hero.shows_overlay());
    }

    #[test]
    fn window_resize_is_tracked() {
        let mut app = english_app();
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 800.0)));
        assert_eq!(app.window_size, Some(Size::new(1280.0, 800.0)));
    }

    #[test]
    fn dismiss_message_starts_exit_once() {
        let mut app = english_app();
        let id = app.notifier.notify(Notification::success("solar-sun"));

        let _ = app.update(Message::Notification(
            crate::ui::notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(app.notifier.current().is_some_and(Notification::is_exiting));

        let _ = app.update(Message::Notification(
            crate::ui::notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(app.notifier.has_notification());
    }

    #[test]
    fn sign_in_flow_ends_with_success_toast() {
        let mut app = english_app();
        let _ = app.update(Message::SignIn(signin::Message::EmailChanged(
            "user@example.com".into(),
        )));
        let _ = app.update(Message::SignIn(signin::Message::PasswordChanged(
            "secret123".into(),
        )));
        let _ = app.update(Message::SignIn(signin::Message::Submit));
        assert!(app.sign_in.is_busy());

        let _ = app.update(Message::SignIn(signin::Message::SignInFinished));
        assert!(!app.sign_in.is_busy());
        assert_eq!(
            app.notifier.current().map(Notification::message_key),
            Some("notification-signin-success")
        );
    }
}
