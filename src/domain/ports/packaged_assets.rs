//! PackagedAssets port - the compiled-in asset table

use crate::domain::entities::Asset;
use crate::domain::value_objects::{AssetKind, ResourceId};

/// Source of assets bundled at build time
pub trait PackagedAssets {
    /// Packaged assets of `kind`, in registry order
    fn packaged(&self, kind: AssetKind) -> Vec<Asset>;

    /// Look up a packaged asset by resource id
    fn find(&self, kind: AssetKind, id: ResourceId) -> Option<Asset> {
        self.packaged(kind)
            .into_iter()
            .find(|asset| matches!(asset, Asset::Packaged { id: found, .. } if *found == id))
    }
}
