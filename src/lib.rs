// SPDX-License-Identifier: MPL-2.0
//! `solarshare` is the sign-in landing screen of SOLARSHARE, built with the
//! Iced GUI framework.
//!
//! It combines an email/password form with a simulated sign-in, an expandable
//! hero illustration, clickable solar-themed objects and a single-toast
//! notifier, all localized with Fluent.

pub mod app;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;

pub use app::config;
