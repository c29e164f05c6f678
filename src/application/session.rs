//! Lock Session
//!
//! Owns one lock-screen session from `start` to `end`. Pointer events and
//! `tick` calls arrive on the owner's execution context; nothing here runs
//! on its own. Every pending timer is cancelled when the session ends or is
//! dropped.

use std::time::Duration;

use rand::seq::IndexedRandom;

use crate::domain::entities::Asset;
use crate::domain::ports::{Clock, Haptics, MediaPlayer, Presenter};
use crate::domain::services::{
    AppearancePlan, DeferredActionTimer, GestureMachine, GestureState, GestureZone, Point,
    ScreenSize,
};

/// Pulse on every accepted press
pub const PRESS_PULSE: Duration = Duration::from_millis(50);

/// Pulse when the unlock countdown completes
pub const UNLOCK_PULSE: Duration = Duration::from_millis(200);

/// What a pending timer will do when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPurpose {
    Unlock,
    SettingsReveal,
    SoundStart,
    CrackEffect,
}

impl TimerPurpose {
    /// Timers a released pointer abandons
    pub const GESTURE: [TimerPurpose; 2] = [TimerPurpose::Unlock, TimerPurpose::SettingsReveal];
}

impl From<GestureZone> for TimerPurpose {
    fn from(zone: GestureZone) -> Self {
        match zone {
            GestureZone::Unlock => TimerPurpose::Unlock,
            GestureZone::SettingsCorner => TimerPurpose::SettingsReveal,
        }
    }
}

/// Things the host has to react to
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The long press completed; the lock view is gone
    Unlocked,
    /// The corner press completed; show the settings UI
    SettingsRequested,
    SoundStarted,
    /// Playback failed; the session carries on silently
    SoundFailed(String),
    /// Show the crack overlay
    CrackTriggered(Asset),
}

pub struct LockSession<H, M, R, C>
where
    H: Haptics,
    M: MediaPlayer,
    R: Presenter,
    C: Clock,
{
    plan: AppearancePlan,
    crack_overlays: Vec<Asset>,
    haptics: H,
    media: M,
    presenter: R,
    clock: C,
    gestures: GestureMachine,
    timer: DeferredActionTimer<TimerPurpose, ()>,
    started: bool,
    ended: bool,
}

impl<H, M, R, C> LockSession<H, M, R, C>
where
    H: Haptics,
    M: MediaPlayer,
    R: Presenter,
    C: Clock,
{
    pub fn new(plan: AppearancePlan, haptics: H, media: M, presenter: R, clock: C) -> Self {
        Self {
            plan,
            crack_overlays: Vec::new(),
            haptics,
            media,
            presenter,
            clock,
            gestures: GestureMachine::new(),
            timer: DeferredActionTimer::new(),
            started: false,
            ended: false,
        }
    }

    /// Overlays the crack effect picks from at random
    pub fn with_crack_overlays(mut self, overlays: Vec<Asset>) -> Self {
        self.crack_overlays = overlays;
        self
    }

    pub fn plan(&self) -> &AppearancePlan {
        &self.plan
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    pub fn is_pending(&self, purpose: TimerPurpose) -> bool {
        self.timer.is_purpose_pending(purpose)
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn presenter(&self) -> &R {
        &self.presenter
    }

    /// Show the configured layers and schedule the sound cue
    pub fn start(&mut self) {
        if self.started || self.ended {
            return;
        }
        self.started = true;

        self.plan.apply(&mut self.presenter);
        if let Some(cue) = &self.plan.sound {
            self.timer
                .schedule(TimerPurpose::SoundStart, (), cue.start_delay, self.clock.now());
        }
        log::debug!("lock session started");
    }

    /// Start the countdown for the zone under `point`.
    ///
    /// Returns `None` if the press was ignored.
    pub fn pointer_down(&mut self, point: Point, screen: ScreenSize) -> Option<GestureZone> {
        if self.ended {
            return None;
        }

        let zone = self.gestures.pointer_down(point, screen)?;
        self.pulse(PRESS_PULSE);
        self.timer
            .schedule(zone.into(), (), zone.delay(), self.clock.now());
        log::debug!("{:?} countdown started", zone);
        Some(zone)
    }

    pub fn pointer_up(&mut self) {
        self.release();
    }

    pub fn pointer_cancel(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.gestures.pointer_released() {
            let cancelled = self.timer.cancel_group(&TimerPurpose::GESTURE);
            log::debug!("pointer released, {} countdown(s) cancelled", cancelled);
        }
    }

    /// The settings UI closed. Re-apply `plan` and accept gestures again.
    pub fn settings_closed(&mut self, plan: AppearancePlan) {
        if self.ended {
            return;
        }
        self.media.stop();
        self.timer.cancel_purpose(TimerPurpose::SoundStart);
        self.gestures.reset();
        self.plan = plan;
        self.started = false;
        self.start();
    }

    /// Dispatch every timer that came due
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        if self.ended {
            return Vec::new();
        }

        let now = self.clock.now();
        let mut events = Vec::new();
        for (purpose, ()) in self.timer.poll(now) {
            match purpose {
                TimerPurpose::Unlock => {
                    if self.gestures.countdown_elapsed(GestureZone::Unlock) {
                        self.pulse(UNLOCK_PULSE);
                        self.presenter.hide_text();
                        self.presenter.hide_image();
                        if let Some(delay) = self.plan.crack_delay {
                            self.timer
                                .schedule(TimerPurpose::CrackEffect, (), delay, now);
                        }
                        events.push(SessionEvent::Unlocked);
                    }
                }
                TimerPurpose::SettingsReveal => {
                    if self.gestures.countdown_elapsed(GestureZone::SettingsCorner) {
                        events.push(SessionEvent::SettingsRequested);
                    }
                }
                TimerPurpose::SoundStart => {
                    if let Some(cue) = &self.plan.sound {
                        match self.media.play(&cue.source, cue.loop_mode) {
                            Ok(()) => events.push(SessionEvent::SoundStarted),
                            Err(err) => {
                                log::warn!("sound playback failed: {}", err);
                                events.push(SessionEvent::SoundFailed(err.to_string()));
                            }
                        }
                    }
                }
                TimerPurpose::CrackEffect => match self.crack_overlays.choose(&mut rand::rng()) {
                    Some(overlay) => events.push(SessionEvent::CrackTriggered(overlay.clone())),
                    None => log::warn!("crack effect enabled but no overlays are available"),
                },
            }
        }
        events
    }

    /// Cancel everything pending and stop playback
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        let cancelled = self.timer.cancel_all();
        self.media.stop();
        log::debug!("lock session ended, {} timer(s) cancelled", cancelled);
    }

    fn pulse(&mut self, duration: Duration) {
        if let Some(amplitude) = self.plan.vibration {
            self.haptics.vibrate(duration, amplitude);
        }
    }
}

impl<H, M, R, C> Drop for LockSession<H, M, R, C>
where
    H: Haptics,
    M: MediaPlayer,
    R: Presenter,
    C: Clock,
{
    fn drop(&mut self) {
        self.end();
    }
}
