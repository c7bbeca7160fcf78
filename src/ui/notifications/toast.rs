// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the live notification.
//!
//! The toast is a rounded card in the top-right corner with a gradient tinted
//! by the notification kind and a close button. Its opacity and horizontal
//! offset follow the notification's enter/exit animation.

use super::manager::{Message, Notifier};
use super::notification::{Kind, Notification};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::gradient::Linear;
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{
    alignment, font, Background, Border, Color, Degrees, Element, Font, Gradient, Length,
    Padding, Theme,
};
use std::time::Instant;

/// Horizontal distance covered by the slide animation.
const SLIDE_DISTANCE: f32 = spacing::LG;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast at the given visibility (`0.0..=1.0`).
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        visibility: f32,
    ) -> Element<'a, Message> {
        let message_text = resolve_message(notification, i18n);
        let text_color = faded(palette::WHITE, visibility);

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .font(Font {
                weight: font::Weight::Medium,
                ..Font::DEFAULT
            })
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            });

        let dismiss_button = button(
            Text::new("×")
                .size(typography::TITLE_MD)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .on_press(Message::Dismiss(notification.id()))
        .padding(0)
        .width(Length::Fixed(sizing::TOAST_CLOSE))
        .height(Length::Fixed(sizing::TOAST_CLOSE))
        .style(move |theme, status| dismiss_button_style(theme, status, visibility));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let kind = notification.kind();
        Container::new(content)
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding(Padding {
                top: spacing::MD,
                bottom: spacing::MD,
                left: spacing::MD + spacing::XXS,
                right: spacing::MD + spacing::XXS,
            })
            .style(move |_theme: &Theme| toast_container_style(kind, visibility))
            .into()
    }

    /// Renders the toast layer: the live notification pinned top-right, or an
    /// empty element when nothing is shown.
    pub fn view_overlay<'a>(notifier: &'a Notifier, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(notification) = notifier.current() else {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let visibility = notifier.visibility(Instant::now());
        let toast = Self::view(notification, i18n, visibility);

        // Slides in from the right edge and back out on exit.
        let right = spacing::MD + SLIDE_DISTANCE * visibility;

        Container::new(toast)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(Padding {
                top: spacing::MD + spacing::XXS,
                right,
                bottom: 0.0,
                left: 0.0,
            })
            .into()
    }
}

/// Resolves the message text using i18n with optional arguments.
fn resolve_message(notification: &Notification, i18n: &I18n) -> String {
    if notification.message_args().is_empty() {
        i18n.tr(notification.message_key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    }
}

fn faded(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(kind: Kind, visibility: f32) -> container::Style {
    let (start, end) = kind.gradient();
    let alpha = opacity::TOAST * visibility;
    let gradient = Linear::new(Degrees(135.0))
        .add_stop(0.0, Color { a: alpha, ..start })
        .add_stop(1.0, Color { a: alpha, ..end });

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: iced::Shadow {
            color: faded(shadow::TOAST.color, visibility),
            ..shadow::TOAST
        },
        text_color: Some(faded(palette::WHITE, visibility)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status, visibility: f32) -> button::Style {
    let text_color = faded(palette::WHITE, visibility);
    let hover_background = Some(Background::Color(Color {
        a: opacity::OVERLAY_SUBTLE * visibility,
        ..palette::WHITE
    }));

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => hover_background,
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}
