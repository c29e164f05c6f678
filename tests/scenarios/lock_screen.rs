//! Scenario: A Full Lock-Screen Prank
//!
//! Journey: The prankster configures a title, a looping siren, vibration and
//! the crack effect, hands the phone over, and the victim tries to get in.
//!
//! Steps:
//! 1. Settings are written and loaded into an appearance plan
//! 2. The session starts: title shows, sound starts after its delay
//! 3. A short press is abandoned; nothing unlocks
//! 4. The prankster opens settings from the top-right corner and disables the title
//! 5. A nine-second press unlocks; the crack overlay follows
//! 6. Dropping the session stops playback
//!
//! Success Criteria:
//! - Every timer fires only on tick, in order
//! - Released presses never unlock
//! - Nothing keeps playing after the session is gone

use std::time::Duration;

use lookatme::application::{LockSession, SessionEvent};
use lookatme::config::Settings;
use lookatme::domain::ports::ManualClock;
use lookatme::domain::services::{GestureState, Point, ScreenSize};
use lookatme::domain::value_objects::{LoopMode, LoopModeKind};
use lookatme::{AppearancePlan, AssetIdentifier, BuiltinAssets};

use crate::common::*;

const SCREEN: ScreenSize = ScreenSize {
    width: 1080.0,
    height: 2340.0,
};

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn scenario_prank_from_setup_to_crack() {
    let env = TestEnv::new();

    // Step 1: configure
    let siren = AssetIdentifier::resource(0x7f0e_0000);
    Settings::update(&env.settings_path(), |s| {
        s.text.enabled = true;
        s.text.content = "Locked by IT".to_string();
        s.sound.enabled = true;
        s.sound.source = Some(siren.clone());
        s.sound.delay_seconds = 2;
        s.sound.loop_mode = LoopModeKind::Loop;
        s.vibration.enabled = true;
        s.vibration.amplitude = 200;
        s.crack.enabled = true;
        s.crack.delay_seconds = 3;
    })
    .unwrap();
    let settings = Settings::load(&env.settings_path()).unwrap();
    let plan = AppearancePlan::from_settings(&settings);

    let log = shared_log();
    let clock = ManualClock::new();
    let overlays = BuiltinAssets::new().crack_overlays();
    let mut session = LockSession::new(
        plan,
        FakeHaptics(log.clone()),
        FakePlayer(log.clone()),
        FakeScreen(log.clone()),
        &clock,
    )
    .with_crack_overlays(overlays.clone());

    // Step 2: start
    session.start();
    assert_eq!(
        log.borrow().text.as_ref().map(|t| t.content.as_str()),
        Some("Locked by IT")
    );
    assert!(session.tick().is_empty());
    clock.advance(secs(2));
    assert_eq!(session.tick(), vec![SessionEvent::SoundStarted]);
    assert_eq!(log.borrow().played, vec![(siren, LoopMode::Loop)]);

    // Step 3: short press in the middle
    session.pointer_down(Point::new(540.0, 1200.0), SCREEN);
    clock.advance(secs(3));
    session.pointer_up();
    clock.advance(secs(20));
    assert!(session.tick().is_empty());
    assert_eq!(session.gesture_state(), GestureState::Idle);

    // Step 4: corner press opens settings; title gets disabled
    session.pointer_down(Point::new(1050.0, 40.0), SCREEN);
    clock.advance(secs(5));
    assert_eq!(session.tick(), vec![SessionEvent::SettingsRequested]);

    let settings = Settings::update(&env.settings_path(), |s| s.text.enabled = false).unwrap();
    session.settings_closed(AppearancePlan::from_settings(&settings));
    assert!(log.borrow().text.is_none());

    // Step 5: long press unlocks, crack follows
    session.pointer_down(Point::new(540.0, 1200.0), SCREEN);
    clock.advance(secs(9));
    let events = session.tick();
    assert!(events.contains(&SessionEvent::Unlocked));

    clock.advance(secs(3));
    let events = session.tick();
    match events.as_slice() {
        [SessionEvent::CrackTriggered(overlay)] => assert!(overlays.contains(overlay)),
        other => panic!("expected a crack overlay, got {:?}", other),
    }

    // One 50 ms pulse per accepted press, one 200 ms pulse on unlock
    let vibrations = log.borrow().vibrations.clone();
    assert_eq!(
        vibrations,
        vec![
            (Duration::from_millis(50), 200),
            (Duration::from_millis(50), 200),
            (Duration::from_millis(50), 200),
            (Duration::from_millis(200), 200),
        ]
    );

    // Step 6: dropping the session stops playback
    let stops_before = log.borrow().stops;
    drop(session);
    assert_eq!(log.borrow().stops, stops_before + 1);
}

#[test]
fn scenario_default_settings_show_nothing_and_never_vibrate() {
    let env = TestEnv::new();
    let plan = AppearancePlan::from_settings(&Settings::load_or_default(&env.settings_path()));

    let log = shared_log();
    let clock = ManualClock::new();
    let mut session = LockSession::new(
        plan,
        FakeHaptics(log.clone()),
        FakePlayer(log.clone()),
        FakeScreen(log.clone()),
        &clock,
    );
    session.start();

    session.pointer_down(Point::new(100.0, 1000.0), SCREEN);
    clock.advance(secs(9));
    assert_eq!(session.tick(), vec![SessionEvent::Unlocked]);

    // Crack is off by default, so nothing else ever fires
    clock.advance(secs(60));
    assert!(session.tick().is_empty());

    let log = log.borrow();
    assert!(log.text.is_none());
    assert!(log.image.is_none());
    assert!(log.vibrations.is_empty());
    assert!(log.played.is_empty());
}
