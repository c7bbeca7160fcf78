// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Uses the Fluent localization system. Translations are embedded at build
//! time from `assets/i18n/` and can be overridden from a directory passed on
//! the command line.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Message interpolation (`{ $name }` arguments)
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
