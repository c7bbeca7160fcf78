// SPDX-License-Identifier: MPL-2.0
//! Expandable hero region.
//!
//! The hero region can be blown up into a centered, enlarged view sitting
//! above a full-window dimmed overlay. The expand button, a click on the
//! overlay and the Escape key all go through [`State::toggle`], so the
//! rendered layout always follows the single [`ExpandState`] flag.

use crate::app::config::{HERO_EXPANDED_SCALE, HERO_MAX_VIEWPORT_FRACTION};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing};
use iced::widget::{button, container, mouse_area, opaque, svg, text, tooltip, Column, Container, Row};
use iced::{alignment, Background, Border, Color, Element, Length, Size, Theme};

const EXPAND_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="15 3 21 3 21 9"/><polyline points="9 21 3 21 3 15"/><line x1="21" y1="3" x2="14" y2="10"/><line x1="3" y1="21" x2="10" y2="14"/></svg>"#;

const COMPRESS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="4 14 10 14 10 20"/><polyline points="20 10 14 10 14 4"/><line x1="14" y1="10" x2="21" y2="3"/><line x1="3" y1="21" x2="10" y2="14"/></svg>"#;

/// Whether the hero region is blown up over the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

/// Glyph shown on the expand trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerIcon {
    Expand,
    Compress,
}

impl TriggerIcon {
    fn svg_source(self) -> &'static str {
        match self {
            TriggerIcon::Expand => EXPAND_SVG,
            TriggerIcon::Compress => COMPRESS_SVG,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            TriggerIcon::Expand => "hero-expand-button",
            TriggerIcon::Compress => "hero-compress-button",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    expand: ExpandState,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expand_state(&self) -> ExpandState {
        self.expand
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expand == ExpandState::Expanded
    }

    /// Flips between collapsed and expanded and returns the new state.
    pub fn toggle(&mut self) -> ExpandState {
        self.expand = match self.expand {
            ExpandState::Collapsed => ExpandState::Expanded,
            ExpandState::Expanded => ExpandState::Collapsed,
        };
        tracing::debug!(state = ?self.expand, "hero toggled");
        self.expand
    }

    /// Whether the dimming overlay is part of the view.
    #[must_use]
    pub fn shows_overlay(&self) -> bool {
        self.is_expanded()
    }

    #[must_use]
    pub fn trigger_icon(&self) -> TriggerIcon {
        match self.expand {
            ExpandState::Collapsed => TriggerIcon::Expand,
            ExpandState::Expanded => TriggerIcon::Compress,
        }
    }

    /// Scale applied to the hero content.
    #[must_use]
    pub fn scale(&self) -> f32 {
        match self.expand {
            ExpandState::Collapsed => 1.0,
            ExpandState::Expanded => HERO_EXPANDED_SCALE,
        }
    }
}

/// Messages emitted by the hero controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TriggerPressed,
    OverlayPressed,
    EscapePressed,
}

/// Process a hero message. Returns `true` when the expand state changed.
pub fn update(state: &mut State, message: Message) -> bool {
    match message {
        Message::TriggerPressed | Message::OverlayPressed => {
            state.toggle();
            true
        }
        Message::EscapePressed => {
            if state.is_expanded() {
                state.toggle();
                true
            } else {
                false
            }
        }
    }
}

/// Renders the expand/compress button.
pub fn trigger<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let icon = state.trigger_icon();
    let glyph = svg::Svg::new(svg::Handle::from_memory(icon.svg_source().as_bytes()))
        .width(Length::Fixed(sizing::ICON_SM))
        .height(Length::Fixed(sizing::ICON_SM));

    let trigger = button(glyph)
        .padding(spacing::XS)
        .style(trigger_style)
        .on_press(Message::TriggerPressed);

    tooltip(
        trigger,
        container(text(i18n.tr(icon.label_key()))).padding(spacing::XXS),
        tooltip::Position::Left,
    )
    .into()
}

/// Full-window dimming layer; clicking it collapses the hero.
pub fn overlay<'a>() -> Element<'a, Message> {
    let dim = Container::new(text(""))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            })),
            ..Default::default()
        });

    opaque(mouse_area(dim).on_press(Message::OverlayPressed))
}

/// Wraps the hero content with its trigger in the top-right corner.
///
/// While expanded the frame is centered in the window and limited to 90% of
/// `window` on each axis.
pub fn frame<'a, M: 'a>(
    content: Element<'a, M>,
    trigger: Element<'a, M>,
    expanded: bool,
    window: Option<Size>,
) -> Element<'a, M> {
    let header = Row::new()
        .push(Container::new(text("")).width(Length::Fill))
        .push(trigger);

    let mut card = Container::new(Column::new().spacing(spacing::XS).push(header).push(content))
        .padding(spacing::LG)
        .style(move |theme: &Theme| frame_style(theme, expanded));

    if !expanded {
        return card.width(Length::Fixed(sizing::HERO_WIDTH)).into();
    }

    if let Some(size) = window {
        card = card
            .max_width(size.width * HERO_MAX_VIEWPORT_FRACTION)
            .max_height(size.height * HERO_MAX_VIEWPORT_FRACTION);
    }

    Container::new(card.width(Length::Fixed(sizing::HERO_WIDTH * HERO_EXPANDED_SCALE)))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn frame_style(theme: &Theme, expanded: bool) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: if expanded { shadow::TOAST } else { shadow::NONE },
        ..Default::default()
    }
}

fn trigger_style(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_MEDIUM,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}
