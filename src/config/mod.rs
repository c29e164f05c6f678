//! Settings for the lock screen
//!
//! One struct, loaded and saved as a unit:
//! 1. Environment variables (LOOKATME_*) (highest priority)
//! 2. `settings.toml` in the data directory
//! 3. Built-in defaults (lowest priority)
//!
//! Saves are compare-and-swap on `Settings::revision` and run under an
//! exclusive file lock.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{parse_with_warnings, ConfigError, ConfigResult};
pub use types::{
    CrackSettings, ImageSettings, LayerTransform, Settings, SoundSettings, TextSettings,
    VibrationSettings,
};
