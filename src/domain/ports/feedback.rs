//! Feedback ports - haptics and media playback

use std::time::Duration;

use thiserror::Error;

use crate::domain::value_objects::{AssetIdentifier, LoopMode};

/// Device vibration
pub trait Haptics {
    /// Vibrate once. Callers skip amplitude 0.
    fn vibrate(&mut self, duration: Duration, amplitude: u8);
}

/// Media playback errors
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("cannot play {source_id}: {message}")]
    Unplayable { source_id: String, message: String },
}

/// Sound playback
pub trait MediaPlayer {
    fn play(&mut self, source: &AssetIdentifier, loop_mode: LoopMode) -> Result<(), MediaError>;

    /// Stop and release any playing sound
    fn stop(&mut self);
}
