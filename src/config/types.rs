//! Settings type definitions
//!
//! Every configurable toggle of the lock screen, with its default declared
//! once, here.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    AssetIdentifier, AssetKind, ConfigWarning, LoopMode, LoopModeKind,
};

use super::loader::{self, ConfigResult};

/// Position, scale and rotation of a layer
///
/// Position and scale are percentages driven by 0-100 sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerTransform {
    #[serde(default = "default_percent")]
    pub position_x_percent: f32,

    #[serde(default = "default_percent")]
    pub position_y_percent: f32,

    #[serde(default = "default_percent")]
    pub scale_percent: f32,

    #[serde(default)]
    pub rotation_degrees: f32,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self {
            position_x_percent: default_percent(),
            position_y_percent: default_percent(),
            scale_percent: default_percent(),
            rotation_degrees: 0.0,
        }
    }
}

fn default_percent() -> f32 {
    50.0
}

/// Title text settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_text_content")]
    pub content: String,

    #[serde(default = "default_text_size")]
    pub size: u32,

    /// Active font; platform default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<AssetIdentifier>,

    #[serde(default)]
    pub transform: LayerTransform,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            content: default_text_content(),
            size: default_text_size(),
            font: None,
            transform: LayerTransform::default(),
        }
    }
}

fn default_text_content() -> String {
    "Title".to_string()
}

fn default_text_size() -> u32 {
    34
}

/// Center image settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<AssetIdentifier>,

    #[serde(default)]
    pub transform: LayerTransform,
}

/// Sound settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<AssetIdentifier>,

    #[serde(default)]
    pub delay_seconds: u32,

    #[serde(default)]
    pub loop_mode: LoopModeKind,

    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            source: None,
            delay_seconds: 0,
            loop_mode: LoopModeKind::default(),
            repeat_count: default_repeat_count(),
        }
    }
}

impl SoundSettings {
    pub fn loop_mode(&self) -> LoopMode {
        LoopMode::from_parts(self.loop_mode, self.repeat_count)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(u64::from(self.delay_seconds))
    }
}

fn default_repeat_count() -> u32 {
    1
}

/// Haptic feedback settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibrationSettings {
    #[serde(default)]
    pub enabled: bool,

    /// 0 disables vibration even when enabled
    #[serde(default = "default_amplitude")]
    pub amplitude: u8,
}

impl Default for VibrationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            amplitude: default_amplitude(),
        }
    }
}

fn default_amplitude() -> u8 {
    128
}

/// Delayed screen-crack gag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrackSettings {
    #[serde(default)]
    pub enabled: bool,

    /// Seconds between unlock and the crack
    #[serde(default = "default_crack_delay")]
    pub delay_seconds: u32,
}

impl Default for CrackSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_seconds: default_crack_delay(),
        }
    }
}

impl CrackSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(u64::from(self.delay_seconds))
    }
}

fn default_crack_delay() -> u32 {
    5
}

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Bumped on every save; a save only succeeds against the revision it
    /// was loaded from.
    #[serde(default)]
    pub revision: u64,

    #[serde(default)]
    pub text: TextSettings,

    #[serde(default)]
    pub image: ImageSettings,

    #[serde(default)]
    pub sound: SoundSettings,

    #[serde(default)]
    pub vibration: VibrationSettings,

    #[serde(default)]
    pub crack: CrackSettings,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> ConfigResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `path` if it exists, defaults otherwise; env overrides applied.
    /// A file that fails to parse is an error.
    pub fn load_effective(path: &Path) -> ConfigResult<Self> {
        loader::load_effective(path)
    }

    /// Load from `path`, falling back to defaults; env overrides applied
    pub fn load_or_default(path: &Path) -> Self {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (LOOKATME_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Compare-and-swap save; returns the revision now on disk
    pub fn save(&self, path: &Path) -> ConfigResult<u64> {
        loader::save(path, self)
    }

    /// Locked read-modify-write of the settings file
    pub fn update<F>(path: &Path, apply: F) -> ConfigResult<Self>
    where
        F: FnOnce(&mut Settings),
    {
        loader::update(path, apply)
    }

    /// The asset currently selected for `kind`
    ///
    /// Fonts feed the title text, images the center image, sounds playback.
    pub fn selection(&self, kind: AssetKind) -> Option<&AssetIdentifier> {
        match kind {
            AssetKind::Font => self.text.font.as_ref(),
            AssetKind::Image => self.image.source.as_ref(),
            AssetKind::Sound => self.sound.source.as_ref(),
        }
    }

    pub fn selection_mut(&mut self, kind: AssetKind) -> &mut Option<AssetIdentifier> {
        match kind {
            AssetKind::Font => &mut self.text.font,
            AssetKind::Image => &mut self.image.source,
            AssetKind::Sound => &mut self.sound.source,
        }
    }
}
