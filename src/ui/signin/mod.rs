// SPDX-License-Identifier: MPL-2.0
//! Sign-in form with client-side validation and a simulated sign-in.
//!
//! Submitting runs [`validation::validate`]. A rejected submission is reported
//! as [`Event::Rejected`] and leaves the form untouched. An accepted one puts
//! the form into its busy state and reports [`Event::SignInStarted`]; the
//! caller is expected to send [`Message::SignInFinished`] once the simulated
//! latency has elapsed, which clears the fields and ends the busy state.

pub mod validation;

pub use validation::{is_valid_email, is_valid_password, validate, ValidationError};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, text_input, Column, Container, Row, Text},
    Background, Border, Color, Element, Length, Theme,
};
use std::time::Duration;

/// Form fields and busy flag.
#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    password: String,
    busy: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether a simulated sign-in is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}

/// Messages emitted by the sign-in form.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    /// The simulated sign-in round trip has completed.
    SignInFinished,
    GoogleSignIn,
}

/// Events propagated to the parent after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Rejected(ValidationError),
    SignInStarted,
    SignedIn,
    GoogleSignInRequested,
}

/// Process a sign-in message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(value) => {
            if !state.busy {
                state.email = value;
            }
            Event::None
        }
        Message::PasswordChanged(value) => {
            if !state.busy {
                state.password = value;
            }
            Event::None
        }
        Message::Submit => {
            if state.busy {
                return Event::None;
            }
            match validate(&state.email, &state.password) {
                Ok(()) => {
                    state.busy = true;
                    Event::SignInStarted
                }
                Err(err) => Event::Rejected(err),
            }
        }
        Message::SignInFinished => {
            if !state.busy {
                return Event::None;
            }
            state.busy = false;
            state.reset();
            Event::SignedIn
        }
        Message::GoogleSignIn => Event::GoogleSignInRequested,
    }
}

/// Stands in for the sign-in round trip: waits `latency`, then reports
/// completion.
pub async fn simulate_round_trip(latency: Duration) -> Message {
    tokio::time::sleep(latency).await;
    Message::SignInFinished
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let title = Text::new(i18n.tr("signin-title")).size(typography::TITLE_MD);
    let subtitle = Text::new(i18n.tr("signin-subtitle"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let mut email_input = text_input(&i18n.tr("signin-email-placeholder"), &state.email)
        .size(typography::BODY_LG)
        .padding(spacing::SM)
        .style(input_style);
    let mut password_input = text_input(&i18n.tr("signin-password-placeholder"), &state.password)
        .secure(true)
        .size(typography::BODY_LG)
        .padding(spacing::SM)
        .style(input_style);

    if !state.busy {
        email_input = email_input
            .on_input(Message::EmailChanged)
            .on_submit(Message::Submit);
        password_input = password_input
            .on_input(Message::PasswordChanged)
            .on_submit(Message::Submit);
    }

    let submit_label = if state.busy {
        i18n.tr("signin-button-busy")
    } else {
        i18n.tr("signin-button")
    };
    let submit = button(
        Text::new(submit_label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(spacing::XS)
    .style(primary_button_style)
    .on_press_maybe((!state.busy).then_some(Message::Submit));

    let divider = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(container(text("")).width(Length::Fill).height(Length::Fixed(1.0)).style(rule_style))
        .push(Text::new(i18n.tr("signin-divider")).size(typography::CAPTION))
        .push(container(text("")).width(Length::Fill).height(Length::Fixed(1.0)).style(rule_style));

    let google = button(
        Text::new(i18n.tr("signin-google-button"))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(spacing::XS)
    .style(button::secondary)
    .on_press(Message::GoogleSignIn);

    let form = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(subtitle)
        .push(field_label(i18n.tr("signin-email-label"), !state.email.is_empty()))
        .push(email_input)
        .push(field_label(i18n.tr("signin-password-label"), !state.password.is_empty()))
        .push(password_input)
        .push(submit)
        .push(divider)
        .push(google);

    Container::new(form)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(card_style)
        .into()
}

/// Field label, highlighted once the field holds a value.
fn field_label<'a>(label: String, filled: bool) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(if filled {
                palette::SUN_500
            } else {
                theme.palette().text
            }),
        })
        .into()
}

fn input_style(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::default(theme, status);
    let focused = matches!(status, text_input::Status::Focused { .. });

    text_input::Style {
        border: Border {
            color: if focused {
                palette::SUN_500
            } else {
                base.border.color
            },
            width: if focused {
                border::WIDTH_MD
            } else {
                border::WIDTH_SM
            },
            radius: radius::MD.into(),
        },
        ..base
    }
}

fn primary_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::primary(theme, status);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::SUN_700,
        button::Status::Active => palette::SUN_500,
        button::Status::Disabled => Color {
            a: 0.6,
            ..palette::SUN_500
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..base
    }
}

fn rule_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        ..Default::default()
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
