//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_kind;
mod config_warning;
mod identifier;
mod loop_mode;

pub use asset_kind::AssetKind;
pub use config_warning::ConfigWarning;
pub use identifier::{AssetIdentifier, IdentifierError, ResourceId};
pub use loop_mode::{LoopMode, LoopModeKind};
