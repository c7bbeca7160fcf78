// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::hero;
use crate::ui::notifications;
use crate::ui::signin;
use crate::ui::solar_objects;
use iced::widget::image;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SignIn(signin::Message),
    Hero(hero::Message),
    SolarObject(solar_objects::Message),
    Notification(notifications::NotificationMessage),
    /// Result of loading the configured hero image.
    HeroImageLoaded(Result<image::Handle, Error>),
    WindowResized(Size),
    /// Periodic tick driving toast and bounce animations.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SOLARSHARE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
