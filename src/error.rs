//! Error types for LookAtMe
//!
//! Each concern has its own `thiserror` enum; `LookAtMeError` wraps them for
//! callers that cross several layers.

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::ports::{MediaError, SourceError, StoreError};
use crate::domain::services::CatalogError;
use crate::domain::value_objects::{AssetKind, IdentifierError};

/// Result type alias for LookAtMe operations
pub type LookAtMeResult<T> = Result<T, LookAtMeError>;

/// Main error type for LookAtMe operations
#[derive(Error, Debug)]
pub enum LookAtMeError {
    /// Import, listing or deletion of user assets failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Settings could not be read or written
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An identifier does not name a known asset
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Malformed `res:` / `file:` identifier
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Media(#[from] MediaError),

    /// Packaged assets ship with the app and cannot be removed
    #[error("packaged {kind} '{name}' cannot be deleted")]
    NotDeletable { kind: AssetKind, name: String },
}
