// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast display window and exit animation
//! - **Sign-in**: Form rules and simulated latency
//! - **Hero**: Expanded view scaling
//! - **Solar objects**: Click bounce animation

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays on screen before it starts leaving (in seconds).
pub const DEFAULT_NOTIFICATION_DISPLAY_SECS: u64 = 5;

/// Minimum display window (in seconds).
pub const MIN_NOTIFICATION_DISPLAY_SECS: u64 = 1;

/// Maximum display window (in seconds).
pub const MAX_NOTIFICATION_DISPLAY_SECS: u64 = 60;

/// Duration of the toast slide-in and slide-out animations (in milliseconds).
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 300;

/// Maximum animation duration (in milliseconds).
pub const MAX_EXIT_ANIMATION_MS: u64 = 2_000;

// ==========================================================================
// Sign-in Defaults
// ==========================================================================

/// Simulated sign-in round trip (in milliseconds).
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 2_000;

/// Maximum simulated latency (in milliseconds).
pub const MAX_SIMULATED_LATENCY_MS: u64 = 30_000;

/// Minimum accepted password length, counted in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 6;

// ==========================================================================
// Hero Defaults
// ==========================================================================

/// Scale applied to the hero content while expanded.
pub const HERO_EXPANDED_SCALE: f32 = 1.2;

/// Fraction of the window the expanded hero may occupy on each axis.
pub const HERO_MAX_VIEWPORT_FRACTION: f32 = 0.9;

// ==========================================================================
// Solar Object Defaults
// ==========================================================================

/// Scale applied to a solar object while it bounces.
pub const BOUNCE_SCALE: f32 = 1.3;

/// Duration of the click bounce (in milliseconds).
pub const BOUNCE_DURATION_MS: u64 = 200;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_NOTIFICATION_DISPLAY_SECS >= MIN_NOTIFICATION_DISPLAY_SECS);
    assert!(DEFAULT_NOTIFICATION_DISPLAY_SECS <= MAX_NOTIFICATION_DISPLAY_SECS);
    assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_EXIT_ANIMATION_MS);
    assert!(DEFAULT_SIMULATED_LATENCY_MS <= MAX_SIMULATED_LATENCY_MS);
    assert!(MIN_PASSWORD_LEN > 0);
};
