//! Asset catalog
//!
//! Merges the compiled-in assets with whatever the user imported, and
//! resolves a persisted identifier back to an asset.

use thiserror::Error;

use crate::domain::entities::Asset;
use crate::domain::ports::{AssetStore, PackagedAssets, StoreError};
use crate::domain::value_objects::{AssetIdentifier, AssetKind};

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no {kind} asset matches '{identifier}'")]
    NotFound {
        kind: AssetKind,
        identifier: AssetIdentifier,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read-only view over packaged and imported assets
pub struct AssetCatalog<'a, P: PackagedAssets + ?Sized, S: AssetStore + ?Sized> {
    packaged: &'a P,
    store: &'a S,
}

impl<'a, P: PackagedAssets + ?Sized, S: AssetStore + ?Sized> AssetCatalog<'a, P, S> {
    pub fn new(packaged: &'a P, store: &'a S) -> Self {
        Self { packaged, store }
    }

    /// Packaged assets first (registry order), then imported ones (index order)
    pub fn list(&self, kind: AssetKind) -> Result<Vec<Asset>, CatalogError> {
        let mut assets = self.packaged.packaged(kind);
        assets.extend(self.store.list_paths(kind)?.into_iter().map(Asset::imported));
        Ok(assets)
    }

    /// Resolve a persisted identifier. Unknown resource ids and unrecorded
    /// paths are errors, not "no asset".
    pub fn resolve(
        &self,
        kind: AssetKind,
        identifier: &AssetIdentifier,
    ) -> Result<Asset, CatalogError> {
        let found = match identifier {
            AssetIdentifier::Resource(id) => self.packaged.find(kind, *id),
            AssetIdentifier::File(path) => self
                .store
                .list_paths(kind)?
                .into_iter()
                .find(|recorded| recorded == path)
                .map(Asset::imported),
        };

        found.ok_or_else(|| CatalogError::NotFound {
            kind,
            identifier: identifier.clone(),
        })
    }
}
