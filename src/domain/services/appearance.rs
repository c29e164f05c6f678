//! Preference-backed appearance
//!
//! Turns [`Settings`] into an [`AppearancePlan`]: which layers are visible,
//! where they sit, and what they show. Disabled features are `None` and get
//! hidden, never rendered empty.

use std::time::Duration;

use crate::config::{LayerTransform, Settings};
use crate::domain::ports::Presenter;
use crate::domain::value_objects::{AssetIdentifier, LoopMode};

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Map a 0-100 position percentage to a pixel offset inside the container.
///
/// `offset = (container - content) * percent / 100`; no clamping.
pub fn position_offset(container: f32, content: f32, percent: f32) -> f32 {
    (container - content) * (percent / 100.0)
}

/// Map a 0-100 scale percentage to a 0.5-1.5 multiplier.
pub fn scale_multiplier(percent: f32) -> f32 {
    0.5 + percent / 100.0
}

impl LayerTransform {
    /// Pixel offset of content of `content` size inside `container`
    pub fn offset(&self, container: Size, content: Size) -> (f32, f32) {
        (
            position_offset(container.width, content.width, self.position_x_percent),
            position_offset(container.height, content.height, self.position_y_percent),
        )
    }

    pub fn scale(&self) -> f32 {
        scale_multiplier(self.scale_percent)
    }
}

/// Visible title text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    pub content: String,
    pub size: f32,
    /// `None` means the platform default typeface
    pub font: Option<AssetIdentifier>,
    pub transform: LayerTransform,
}

/// Visible center image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayer {
    pub source: AssetIdentifier,
    pub transform: LayerTransform,
}

/// Sound to start once the lock screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct SoundCue {
    pub source: AssetIdentifier,
    pub loop_mode: LoopMode,
    pub start_delay: Duration,
}

/// Everything the lock screen needs from settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppearancePlan {
    pub text: Option<TextLayer>,
    pub image: Option<ImageLayer>,
    pub sound: Option<SoundCue>,
    /// Vibration amplitude; `None` when disabled or amplitude is 0
    pub vibration: Option<u8>,
    /// Delay between unlock and the crack effect
    pub crack_delay: Option<Duration>,
}

impl AppearancePlan {
    pub fn from_settings(settings: &Settings) -> Self {
        let text = settings.text.enabled.then(|| TextLayer {
            content: settings.text.content.clone(),
            size: settings.text.size as f32,
            font: settings.text.font.clone(),
            transform: settings.text.transform,
        });

        let image = if settings.image.enabled {
            match &settings.image.source {
                Some(source) => Some(ImageLayer {
                    source: source.clone(),
                    transform: settings.image.transform,
                }),
                None => {
                    log::warn!("image layer enabled without a selected image; hiding it");
                    None
                }
            }
        } else {
            None
        };

        let sound = if settings.sound.enabled {
            match &settings.sound.source {
                Some(source) => Some(SoundCue {
                    source: source.clone(),
                    loop_mode: settings.sound.loop_mode(),
                    start_delay: settings.sound.delay(),
                }),
                None => {
                    log::warn!("sound enabled without a selected sound; staying silent");
                    None
                }
            }
        } else {
            None
        };

        let vibration = (settings.vibration.enabled && settings.vibration.amplitude > 0)
            .then_some(settings.vibration.amplitude);

        let crack_delay = settings.crack.enabled.then(|| settings.crack.delay());

        Self {
            text,
            image,
            sound,
            vibration,
            crack_delay,
        }
    }

    /// Push the visual layers to the presenter
    pub fn apply(&self, presenter: &mut dyn Presenter) {
        match &self.text {
            Some(layer) => presenter.show_text(layer),
            None => presenter.hide_text(),
        }
        match &self.image {
            Some(layer) => presenter.show_image(layer),
            None => presenter.hide_image(),
        }
    }
}
