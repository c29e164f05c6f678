//! Asset Library Use Case
//!
//! Import, list, select and delete fonts, images and sounds. Selection is
//! written into the settings file; everything else goes through the store.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::domain::entities::Asset;
use crate::domain::ports::{
    AssetStore, ContentSource, DeleteOutcome, FilePicker, PackagedAssets,
};
use crate::domain::services::AssetCatalog;
use crate::domain::value_objects::{AssetIdentifier, AssetKind};
use crate::error::{LookAtMeError, LookAtMeResult};

/// Result of deleting an imported asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub outcome: DeleteOutcome,
    /// The deleted asset was the active selection and has been cleared
    pub selection_cleared: bool,
}

pub struct AssetLibrary<P, S>
where
    P: PackagedAssets,
    S: AssetStore,
{
    packaged: P,
    store: S,
    settings_path: PathBuf,
}

impl<P, S> AssetLibrary<P, S>
where
    P: PackagedAssets,
    S: AssetStore,
{
    pub fn new(packaged: P, store: S, settings_path: impl Into<PathBuf>) -> Self {
        Self {
            packaged,
            store,
            settings_path: settings_path.into(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn catalog(&self) -> AssetCatalog<'_, P, S> {
        AssetCatalog::new(&self.packaged, &self.store)
    }

    /// Packaged assets first, then imported ones
    pub fn list(&self, kind: AssetKind) -> LookAtMeResult<Vec<Asset>> {
        Ok(self.catalog().list(kind)?)
    }

    /// Copy `source` into private storage and record it.
    ///
    /// If recording fails the copied file is removed again.
    pub fn import(
        &self,
        source: &mut dyn ContentSource,
        kind: AssetKind,
    ) -> LookAtMeResult<Asset> {
        let path = self.store.copy_to_private_storage(source, kind)?;

        if let Err(err) = self.store.record_path(kind, &path) {
            if let Err(cleanup) = self.store.delete(kind, &path) {
                log::warn!(
                    "failed to remove unrecorded copy {}: {}",
                    path.display(),
                    cleanup
                );
            }
            return Err(err.into());
        }

        log::info!("imported {} {}", kind, path.display());
        Ok(Asset::imported(path))
    }

    /// Ask `picker` for a file matching the kind's MIME filter and import it.
    ///
    /// Returns `None` when the user dismissed the picker.
    pub fn pick_and_import(
        &self,
        picker: &mut dyn FilePicker,
        kind: AssetKind,
    ) -> LookAtMeResult<Option<Asset>> {
        match picker.pick(kind.mime_filter()) {
            Some(mut source) => self.import(source.as_mut(), kind).map(Some),
            None => Ok(None),
        }
    }

    /// Make `identifier` the active asset for `kind`
    pub fn select(&self, kind: AssetKind, identifier: &AssetIdentifier) -> LookAtMeResult<Asset> {
        let asset = self.catalog().resolve(kind, identifier)?;
        let stored = asset.identifier();
        Settings::update(&self.settings_path, |settings| {
            *settings.selection_mut(kind) = Some(stored);
        })?;
        log::info!("selected {} {}", kind, identifier);
        Ok(asset)
    }

    /// The active asset for `kind`, if one is set.
    ///
    /// A settings file that does not parse, including a malformed
    /// identifier, is an error rather than "nothing selected".
    pub fn selected(&self, kind: AssetKind) -> LookAtMeResult<Option<Asset>> {
        let settings = Settings::load_effective(&self.settings_path)?;
        match settings.selection(kind) {
            Some(identifier) => Ok(Some(self.catalog().resolve(kind, identifier)?)),
            None => Ok(None),
        }
    }

    /// Delete an imported asset. Clears the selection if it pointed at it.
    pub fn delete(&self, asset: &Asset, kind: AssetKind) -> LookAtMeResult<DeleteReport> {
        let Some(path) = asset.path() else {
            return Err(LookAtMeError::NotDeletable {
                kind,
                name: asset.name().to_string(),
            });
        };
        self.delete_path(kind, path)
    }

    /// Delete the imported file at `path`
    pub fn delete_path(&self, kind: AssetKind, path: &Path) -> LookAtMeResult<DeleteReport> {
        let identifier = AssetIdentifier::File(path.to_path_buf());
        let current = Settings::load_effective(&self.settings_path)?;

        let outcome = self.store.delete(kind, path)?;

        let selection_cleared = current.selection(kind) == Some(&identifier);
        if selection_cleared {
            Settings::update(&self.settings_path, |settings| {
                if settings.selection(kind) == Some(&identifier) {
                    *settings.selection_mut(kind) = None;
                }
            })?;
            log::info!("cleared {} selection {}", kind, identifier);
        }

        Ok(DeleteReport {
            outcome,
            selection_cleared,
        })
    }
}
