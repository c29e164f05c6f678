//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer (or the host platform) provides implementations.

pub mod asset_store;
pub mod clock;
pub mod content_source;
pub mod feedback;
pub mod file_system;
pub mod packaged_assets;
pub mod presenter;

pub use asset_store::{AssetStore, DeleteOutcome, StoreError, StoreResult};
pub use clock::{Clock, ManualClock, SystemClock};
pub use content_source::{ContentSource, FilePicker, SourceError};
pub use feedback::{Haptics, MediaError, MediaPlayer};
pub use file_system::{FileSystem, FsError, FsResult};
pub use packaged_assets::PackagedAssets;
pub use presenter::Presenter;
