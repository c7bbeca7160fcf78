// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and window events to the app and drives the
//! animation tick.

use super::Message;
use crate::ui::hero;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Tick interval while an animation is playing.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick interval while a toast is simply waiting out its display window.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Listens for Escape (collapses the hero) and window resizes.
///
/// Escape is handled even when a text input captured it, matching a
/// document-level key listener.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Hero(hero::Message::EscapePressed)),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates the periodic tick subscription for toast timers and animations.
pub fn create_tick_subscription(has_notification: bool, animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if has_notification {
        time::every(IDLE_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
