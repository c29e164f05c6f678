//! Lock-screen long-press gesture
//!
//! A pointer-down commits to exactly one path, decided by where it lands:
//! the top-right corner box starts the settings-reveal countdown, anywhere
//! else starts the unlock countdown. Releasing before the countdown ends
//! returns to `Idle`.

use std::time::Duration;

/// Long press needed to unlock
pub const UNLOCK_DELAY: Duration = Duration::from_secs(9);

/// Long press in the corner needed to reveal settings
pub const SETTINGS_REVEAL_DELAY: Duration = Duration::from_secs(5);

/// Width of the settings corner, as a fraction of screen width
pub const SETTINGS_AREA_WIDTH_FRACTION: f32 = 0.2;

/// Height of the settings corner in pixels
pub const SETTINGS_AREA_HEIGHT_PX: f32 = 200.0;

/// Pointer position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Which countdown a pointer-down starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureZone {
    Unlock,
    SettingsCorner,
}

impl GestureZone {
    /// Static region test for a pointer-down
    pub fn classify(point: Point, screen: ScreenSize) -> Self {
        let corner_width = screen.width * SETTINGS_AREA_WIDTH_FRACTION;
        if point.x > screen.width - corner_width && point.y < SETTINGS_AREA_HEIGHT_PX {
            GestureZone::SettingsCorner
        } else {
            GestureZone::Unlock
        }
    }

    /// Countdown length for this zone
    pub fn delay(&self) -> Duration {
        match self {
            GestureZone::Unlock => UNLOCK_DELAY,
            GestureZone::SettingsCorner => SETTINGS_REVEAL_DELAY,
        }
    }
}

/// Gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    PendingUnlock,
    PendingSettingsReveal,
    Unlocked,
    SettingsShown,
}

impl GestureState {
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            GestureState::PendingUnlock | GestureState::PendingSettingsReveal
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GestureState::Unlocked | GestureState::SettingsShown)
    }
}

/// Pure gesture state machine; timing is owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct GestureMachine {
    state: GestureState,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns the zone whose countdown should start, or `None` if the event
    /// is ignored (a gesture is already pending or finished).
    pub fn pointer_down(&mut self, point: Point, screen: ScreenSize) -> Option<GestureZone> {
        if self.state != GestureState::Idle {
            return None;
        }

        let zone = GestureZone::classify(point, screen);
        self.state = match zone {
            GestureZone::Unlock => GestureState::PendingUnlock,
            GestureZone::SettingsCorner => GestureState::PendingSettingsReveal,
        };
        Some(zone)
    }

    /// Pointer up or cancel. Returns true if a pending countdown was abandoned.
    pub fn pointer_released(&mut self) -> bool {
        if self.state.is_pending() {
            self.state = GestureState::Idle;
            true
        } else {
            false
        }
    }

    /// The countdown for `zone` elapsed. Returns true if that moved the
    /// machine into its terminal state.
    pub fn countdown_elapsed(&mut self, zone: GestureZone) -> bool {
        let next = match (self.state, zone) {
            (GestureState::PendingUnlock, GestureZone::Unlock) => GestureState::Unlocked,
            (GestureState::PendingSettingsReveal, GestureZone::SettingsCorner) => {
                GestureState::SettingsShown
            }
            _ => return false,
        };
        self.state = next;
        true
    }

    /// Back to `Idle`, e.g. when the settings dialog is dismissed
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}
