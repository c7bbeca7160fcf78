// SPDX-License-Identifier: MPL-2.0
//! Clickable solar-themed tiles shown under the hero illustration.
//!
//! Clicking a tile makes it bounce for a moment and asks the app to show the
//! tile's message; hovering brightens it.

use crate::app::config::{BOUNCE_DURATION_MS, BOUNCE_SCALE};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing};
use iced::widget::{container, mouse_area, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarObjectKind {
    Sun,
    PanelRoof,
    PanelHome,
    Leaf,
    Battery,
    Bolt,
    Recycle,
    House,
    Earth,
    Car,
}

impl SolarObjectKind {
    /// All objects in display order.
    pub const ALL: [SolarObjectKind; 10] = [
        SolarObjectKind::Sun,
        SolarObjectKind::PanelRoof,
        SolarObjectKind::PanelHome,
        SolarObjectKind::Leaf,
        SolarObjectKind::Battery,
        SolarObjectKind::Bolt,
        SolarObjectKind::Recycle,
        SolarObjectKind::House,
        SolarObjectKind::Earth,
        SolarObjectKind::Car,
    ];

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            SolarObjectKind::Sun => "☀",
            SolarObjectKind::PanelRoof | SolarObjectKind::PanelHome => "▦",
            SolarObjectKind::Leaf => "🌱",
            SolarObjectKind::Battery => "🔋",
            SolarObjectKind::Bolt => "⚡",
            SolarObjectKind::Recycle => "♻",
            SolarObjectKind::House => "🏡",
            SolarObjectKind::Earth => "🌍",
            SolarObjectKind::Car => "🚗",
        }
    }

    /// i18n key of the message shown when the object is clicked.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            SolarObjectKind::Sun => "solar-sun",
            SolarObjectKind::PanelRoof => "solar-panel-roof",
            SolarObjectKind::PanelHome => "solar-panel-home",
            SolarObjectKind::Leaf => "solar-leaf",
            SolarObjectKind::Battery => "solar-battery",
            SolarObjectKind::Bolt => "solar-bolt",
            SolarObjectKind::Recycle => "solar-recycle",
            SolarObjectKind::House => "solar-house",
            SolarObjectKind::Earth => "solar-earth",
            SolarObjectKind::Car => "solar-car",
        }
    }
}

#[derive(Debug, Clone)]
struct SolarObject {
    kind: SolarObjectKind,
    hovered: bool,
    bounce_started: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct State {
    objects: Vec<SolarObject>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: SolarObjectKind::ALL
                .iter()
                .map(|&kind| SolarObject {
                    kind,
                    hovered: false,
                    bounce_started: None,
                })
                .collect(),
        }
    }

    fn object_mut(&mut self, kind: SolarObjectKind) -> Option<&mut SolarObject> {
        self.objects.iter_mut().find(|o| o.kind == kind)
    }

    fn object(&self, kind: SolarObjectKind) -> Option<&SolarObject> {
        self.objects.iter().find(|o| o.kind == kind)
    }

    #[must_use]
    pub fn is_hovered(&self, kind: SolarObjectKind) -> bool {
        self.object(kind).is_some_and(|o| o.hovered)
    }

    #[must_use]
    pub fn is_bouncing(&self, kind: SolarObjectKind) -> bool {
        self.object(kind).is_some_and(|o| o.bounce_started.is_some())
    }

    /// Whether any bounce is still playing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.objects.iter().any(|o| o.bounce_started.is_some())
    }

    /// Drops every hover highlight. Tiles rebuilt elsewhere in the layout
    /// never receive their exit event.
    pub fn clear_hover(&mut self) {
        for object in &mut self.objects {
            object.hovered = false;
        }
    }

    /// Ends bounces that have run their course by `now`.
    pub fn tick(&mut self, now: Instant) {
        let duration = Duration::from_millis(BOUNCE_DURATION_MS);
        for object in &mut self.objects {
            if let Some(started) = object.bounce_started {
                if now.saturating_duration_since(started) >= duration {
                    object.bounce_started = None;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Pressed(SolarObjectKind),
    Entered(SolarObjectKind),
    Exited(SolarObjectKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Show the given i18n message as a success notification.
    ShowMessage(&'static str),
}

pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::Pressed(kind) => {
            if let Some(object) = state.object_mut(kind) {
                // Restarts the bounce when clicked again mid-animation.
                object.bounce_started = Some(now);
            }
            Event::ShowMessage(kind.message_key())
        }
        Message::Entered(kind) => {
            if let Some(object) = state.object_mut(kind) {
                object.hovered = true;
            }
            Event::None
        }
        Message::Exited(kind) => {
            if let Some(object) = state.object_mut(kind) {
                object.hovered = false;
            }
            Event::None
        }
    }
}

/// Renders the row of tiles at the given content `scale`.
pub fn view<'a>(state: &'a State, scale: f32) -> Element<'a, Message> {
    let tiles = state.objects.iter().map(|object| tile(object, scale));

    Row::with_children(tiles)
        .spacing(spacing::XS * scale)
        .wrap()
        .into()
}

fn tile<'a>(object: &SolarObject, scale: f32) -> Element<'a, Message> {
    let bounce = if object.bounce_started.is_some() {
        BOUNCE_SCALE
    } else {
        1.0
    };
    let side = sizing::SOLAR_OBJECT * scale;
    let hovered = object.hovered;

    let glyph = Text::new(object.kind.glyph())
        .size(sizing::ICON_MD * scale * bounce)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let body = Container::new(glyph)
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |theme: &Theme| tile_style(theme, hovered));

    let kind = object.kind;
    mouse_area(body)
        .on_press(Message::Pressed(kind))
        .on_enter(Message::Entered(kind))
        .on_exit(Message::Exited(kind))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

fn tile_style(theme: &Theme, hovered: bool) -> container::Style {
    let base = theme.extended_palette().background.weak.color;
    let background = if hovered {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::SUN_300
        }
    } else {
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..base
        }
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: if hovered { shadow::GLOW } else { shadow::NONE },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_object_has_a_distinct_message() {
        let mut keys: Vec<_> = SolarObjectKind::ALL.iter().map(|k| k.message_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SolarObjectKind::ALL.len());
    }

    #[test]
    fn click_shows_message_and_bounces_briefly() {
        let mut state = State::new();
        let now = Instant::now();

        let event = update(&mut state, Message::Pressed(SolarObjectKind::Battery), now);
        assert_eq!(event, Event::ShowMessage("solar-battery"));
        assert!(state.is_bouncing(SolarObjectKind::Battery));
        assert!(state.is_animating());

        state.tick(now + Duration::from_millis(BOUNCE_DURATION_MS - 1));
        assert!(state.is_bouncing(SolarObjectKind::Battery));

        state.tick(now + Duration::from_millis(BOUNCE_DURATION_MS));
        assert!(!state.is_bouncing(SolarObjectKind::Battery));
        assert!(!state.is_animating());
    }

    #[test]
    fn hover_tracks_enter_and_exit() {
        let mut state = State::new();
        let now = Instant::now();

        update(&mut state, Message::Entered(SolarObjectKind::Sun), now);
        assert!(state.is_hovered(SolarObjectKind::Sun));
        assert!(!state.is_hovered(SolarObjectKind::Earth));

        update(&mut state, Message::Exited(SolarObjectKind::Sun), now);
        assert!(!state.is_hovered(SolarObjectKind::Sun));
    }

    #[test]
    fn hovered_tile_glows() {
        let theme = Theme::Light;
        assert_eq!(tile_style(&theme, true).shadow.blur_radius, shadow::GLOW.blur_radius);
        assert_eq!(tile_style(&theme, false).shadow.blur_radius, 0.0);
    }
}
