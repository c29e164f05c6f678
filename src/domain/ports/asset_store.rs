//! AssetStore port - persistence for user-imported assets
//!
//! Owns both the copied files in private storage and the per-kind set of
//! recorded paths.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::ports::content_source::{ContentSource, SourceError};
use crate::domain::value_objects::AssetKind;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Asset store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Streaming the picked content into private storage failed
    #[error("failed to copy '{name}' into private storage: {source}")]
    Copy {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The picked content could not be read at all
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The physical file exists but could not be removed
    #[error("failed to delete {}: {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is outside private {kind} storage", .path.display())]
    OutsidePrivateStorage { path: PathBuf, kind: AssetKind },

    #[error("asset index corrupted at {}: {message}", .path.display())]
    Corrupted { path: PathBuf, message: String },

    #[error("asset index access failed: {message}")]
    Access { message: String },
}

/// What `delete` actually removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// A file existed and was removed
    pub file_removed: bool,
    /// The path was present in the index and was dropped
    pub record_removed: bool,
}

/// Abstract store for user-imported assets
pub trait AssetStore {
    /// Stream `source` into a freshly named file under the kind's directory
    fn copy_to_private_storage(
        &self,
        source: &mut dyn ContentSource,
        kind: AssetKind,
    ) -> StoreResult<PathBuf>;

    /// Add `path` to the set recorded for `kind`
    fn record_path(&self, kind: AssetKind, path: &Path) -> StoreResult<()>;

    /// All recorded paths for `kind`, in stable order
    fn list_paths(&self, kind: AssetKind) -> StoreResult<Vec<PathBuf>>;

    /// Remove the file, then its record. Fails without touching the record
    /// if the file exists and cannot be removed.
    fn delete(&self, kind: AssetKind, path: &Path) -> StoreResult<DeleteOutcome>;
}
