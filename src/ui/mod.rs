// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its own messages, and reports anything the app
//! must act on as an event.
//!
//! # Components
//!
//! - [`signin`] - Sign-in form, validation and busy state
//! - [`hero`] - Expandable hero region and its dimming overlay
//! - [`solar_objects`] - Clickable solar-themed tiles
//! - [`illustration`] - Generated hero artwork and image fallback
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod hero;
pub mod illustration;
pub mod notifications;
pub mod signin;
pub mod solar_objects;
pub mod theming;
