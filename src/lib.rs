//! LookAtMe - core of a prank lock screen
//!
//! A fake lock screen shows configurable text, an image and a sound, and
//! only lets go after a long press. A press in the top-right corner opens
//! the settings instead. Users can import their own fonts, images and
//! sounds next to the packaged ones.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{AssetLibrary, LockSession, SessionEvent};
pub use config::{ConfigError, Settings};
pub use domain::entities::Asset;
pub use domain::services::AppearancePlan;
pub use domain::value_objects::{AssetIdentifier, AssetKind, LoopMode};
pub use error::{LookAtMeError, LookAtMeResult};
pub use infrastructure::{BuiltinAssets, LocalFileSource, TomlAssetStore};
