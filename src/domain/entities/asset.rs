//! Asset entity - something the user can pick as font, image or sound
//!
//! Packaged assets ship with the app and are addressed by resource id.
//! User-imported assets are files copied into private storage.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{AssetIdentifier, ResourceId};

/// A selectable asset
///
/// Identity is the pair (name, variant): a packaged `alarm` and an imported
/// `alarm` are different assets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Bundled at build time
    Packaged { name: String, id: ResourceId },
    /// Copied into private storage after user selection
    UserImported { name: String, path: PathBuf },
}

impl Asset {
    pub fn packaged(name: impl Into<String>, id: ResourceId) -> Self {
        Asset::Packaged {
            name: name.into(),
            id,
        }
    }

    /// Build an imported asset; the display name is the file stem.
    pub fn imported(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Asset::UserImported { name, path }
    }

    pub fn name(&self) -> &str {
        match self {
            Asset::Packaged { name, .. } | Asset::UserImported { name, .. } => name,
        }
    }

    pub fn is_packaged(&self) -> bool {
        matches!(self, Asset::Packaged { .. })
    }

    /// Only imported assets can be deleted.
    pub fn is_deletable(&self) -> bool {
        matches!(self, Asset::UserImported { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Asset::Packaged { .. } => None,
            Asset::UserImported { path, .. } => Some(path),
        }
    }

    /// The identifier written to settings when this asset is selected
    pub fn identifier(&self) -> AssetIdentifier {
        match self {
            Asset::Packaged { id, .. } => AssetIdentifier::Resource(*id),
            Asset::UserImported { path, .. } => AssetIdentifier::File(path.clone()),
        }
    }
}
