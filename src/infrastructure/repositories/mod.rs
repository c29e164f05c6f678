//! Repository Implementations
//!
//! Concrete implementations of the asset ports.

mod asset_store;
mod packaged;

pub use asset_store::{sanitize_file_name, TomlAssetStore};
pub use packaged::BuiltinAssets;
