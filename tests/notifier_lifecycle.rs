// SPDX-License-Identifier: MPL-2.0
use solarshare::ui::notifications::{Kind, Notification, NotificationMessage, Notifier, Phase};
use std::time::{Duration, Instant};

const DISPLAY: Duration = Duration::from_secs(5);
const EXIT: Duration = Duration::from_millis(300);

#[test]
fn toast_lives_for_display_window_plus_exit_animation() {
    let mut notifier = Notifier::with_timing(DISPLAY, EXIT);
    let start = Instant::now();
    let id = notifier.notify(Notification::new_at(Kind::Success, "solar-sun", start));

    assert_eq!(notifier.tick_at(start + Duration::from_millis(4999)), None);
    assert!(notifier
        .current()
        .is_some_and(|n| n.phase() == Phase::Visible));

    assert_eq!(notifier.tick_at(start + DISPLAY), None);
    assert!(notifier.current().is_some_and(Notification::is_exiting));

    assert_eq!(notifier.tick_at(start + DISPLAY + EXIT), Some(id));
    assert!(!notifier.has_notification());

    // Later ticks have nothing left to remove.
    assert_eq!(notifier.tick_at(start + DISPLAY * 2), None);
}

#[test]
fn new_toast_replaces_old_one_and_ignores_its_dismiss() {
    let mut notifier = Notifier::with_timing(DISPLAY, EXIT);
    let start = Instant::now();
    let first = notifier.notify(Notification::new_at(
        Kind::Error,
        "notification-invalid-email",
        start,
    ));
    let second = notifier.notify(Notification::new_at(
        Kind::Success,
        "notification-signin-success",
        start + Duration::from_secs(1),
    ));

    assert!(!notifier.dismiss_at(first, start + Duration::from_secs(2)));
    let current = notifier.current().expect("second toast");
    assert_eq!(current.id(), second);
    assert!(!current.is_exiting());
}

#[test]
fn manual_dismiss_then_auto_dismiss_removes_once() {
    let mut notifier = Notifier::with_timing(DISPLAY, EXIT);
    let start = Instant::now();
    let id = notifier.notify(Notification::new_at(Kind::Success, "solar-leaf", start));

    let dismissed_at = start + Duration::from_secs(4) + Duration::from_millis(900);
    assert!(notifier.dismiss_at(id, dismissed_at));

    // The display window elapses while the exit animation is running.
    assert_eq!(notifier.tick_at(start + DISPLAY), None);
    assert!(notifier.has_notification());

    assert_eq!(notifier.tick_at(dismissed_at + EXIT), Some(id));
    assert_eq!(notifier.tick_at(dismissed_at + EXIT * 2), None);
}

#[test]
fn dismiss_message_routes_through_handler() {
    let mut notifier = Notifier::new();
    let id = notifier.notify(Notification::success("notification-google-signin"));

    notifier.handle_message(&NotificationMessage::Dismiss(id));

    assert!(notifier.current().is_some_and(Notification::is_exiting));
}

#[test]
fn visibility_ramps_out_during_exit() {
    let mut notifier = Notifier::with_timing(DISPLAY, EXIT);
    let start = Instant::now();
    let id = notifier.notify(Notification::new_at(Kind::Success, "solar-car", start));

    let settled = start + Duration::from_secs(1);
    assert!((notifier.visibility(settled) - 1.0).abs() < f32::EPSILON);

    notifier.dismiss_at(id, settled);
    let halfway = notifier.visibility(settled + EXIT / 2);
    assert!(halfway > 0.0 && halfway < 1.0);
    assert!(notifier.visibility(settled + EXIT) <= f32::EPSILON);
}
