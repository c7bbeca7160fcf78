// SPDX-License-Identifier: MPL-2.0
use solarshare::ui::hero::{self, ExpandState, TriggerIcon};
use solarshare::ui::signin::{self, Event, ValidationError};
use solarshare::ui::solar_objects::{self, SolarObjectKind};
use std::time::{Duration, Instant};

fn fill(state: &mut signin::State, email: &str, password: &str) {
    signin::update(state, signin::Message::EmailChanged(email.to_string()));
    signin::update(state, signin::Message::PasswordChanged(password.to_string()));
}

#[test]
fn email_is_checked_before_password() {
    let mut state = signin::State::new();
    fill(&mut state, "broken", "x");

    assert_eq!(
        signin::update(&mut state, signin::Message::Submit),
        Event::Rejected(ValidationError::InvalidEmail)
    );
}

#[test]
fn rejected_submission_keeps_field_values() {
    let mut state = signin::State::new();
    fill(&mut state, "user@example.com", "12345");

    let event = signin::update(&mut state, signin::Message::Submit);

    assert!(matches!(
        event,
        Event::Rejected(ValidationError::PasswordTooShort { min: 6 })
    ));
    assert_eq!(state.email(), "user@example.com");
    assert_eq!(state.password(), "12345");
    assert!(!state.is_busy());
}

#[test]
fn busy_form_ignores_edits_and_resubmits() {
    let mut state = signin::State::new();
    fill(&mut state, "user@example.com", "123456");
    assert_eq!(
        signin::update(&mut state, signin::Message::Submit),
        Event::SignInStarted
    );

    assert_eq!(
        signin::update(&mut state, signin::Message::Submit),
        Event::None
    );
    signin::update(&mut state, signin::Message::EmailChanged("other@example.com".into()));
    assert_eq!(state.email(), "user@example.com");

    assert_eq!(
        signin::update(&mut state, signin::Message::SignInFinished),
        Event::SignedIn
    );
    assert_eq!(state.email(), "");
    assert_eq!(state.password(), "");
}

#[test]
fn hero_round_trip_through_every_trigger() {
    let mut state = hero::State::new();
    assert_eq!(state.expand_state(), ExpandState::Collapsed);
    assert_eq!(state.trigger_icon(), TriggerIcon::Expand);

    assert!(!hero::update(&mut state, hero::Message::EscapePressed));
    assert_eq!(state.expand_state(), ExpandState::Collapsed);

    for collapse in [
        hero::Message::TriggerPressed,
        hero::Message::OverlayPressed,
        hero::Message::EscapePressed,
    ] {
        assert!(hero::update(&mut state, hero::Message::TriggerPressed));
        assert!(state.shows_overlay());
        assert_eq!(state.trigger_icon(), TriggerIcon::Compress);

        assert!(hero::update(&mut state, collapse));
        assert!(!state.shows_overlay());
        assert_eq!(state.trigger_icon(), TriggerIcon::Expand);
    }
}

#[test]
fn solar_object_click_reports_message_and_bounces_briefly() {
    let mut state = solar_objects::State::new();
    let now = Instant::now();

    let event = solar_objects::update(
        &mut state,
        solar_objects::Message::Pressed(SolarObjectKind::Earth),
        now,
    );

    assert_eq!(event, solar_objects::Event::ShowMessage("solar-earth"));
    assert!(state.is_bouncing(SolarObjectKind::Earth));

    state.tick(now + Duration::from_millis(199));
    assert!(state.is_bouncing(SolarObjectKind::Earth));

    state.tick(now + Duration::from_millis(200));
    assert!(!state.is_bouncing(SolarObjectKind::Earth));
    assert!(!state.is_animating());
}
