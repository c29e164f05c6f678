//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `fs/` - FileSystem implementation and data-root layout
//! - `repositories/` - Asset store and the packaged asset registry
//! - `sources/` - ContentSource implementations

pub mod fs;
pub mod repositories;
pub mod sources;

pub use fs::{lookatme_data_dir, DataLayout, LocalFs};
pub use repositories::{BuiltinAssets, TomlAssetStore};
pub use sources::LocalFileSource;
