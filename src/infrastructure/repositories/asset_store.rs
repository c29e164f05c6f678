//! TOML Asset Store
//!
//! User-imported files live under `<root>/<kind>/`; the set of recorded paths
//! per kind is persisted at `<root>/assets.toml`.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::ports::{
    AssetStore, ContentSource, DeleteOutcome, FileSystem, StoreError, StoreResult,
};
use crate::domain::value_objects::AssetKind;
use crate::infrastructure::fs::LocalFs;

const INDEX_VERSION: u32 = 1;
const UNKNOWN_FILE_NAME: &str = "unknown_file";
const MAX_NAME_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TomlAssetIndex {
    version: u32,
    #[serde(default)]
    fonts: BTreeSet<PathBuf>,
    #[serde(default)]
    images: BTreeSet<PathBuf>,
    #[serde(default)]
    sounds: BTreeSet<PathBuf>,
}

impl TomlAssetIndex {
    fn new() -> Self {
        Self {
            version: INDEX_VERSION,
            ..Self::default()
        }
    }

    fn paths(&self, kind: AssetKind) -> &BTreeSet<PathBuf> {
        match kind {
            AssetKind::Font => &self.fonts,
            AssetKind::Image => &self.images,
            AssetKind::Sound => &self.sounds,
        }
    }

    fn paths_mut(&mut self, kind: AssetKind) -> &mut BTreeSet<PathBuf> {
        match kind {
            AssetKind::Font => &mut self.fonts,
            AssetKind::Image => &mut self.images,
            AssetKind::Sound => &mut self.sounds,
        }
    }
}

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
///
/// A missing or empty display name becomes `unknown_file`.
pub fn sanitize_file_name(display_name: Option<&str>) -> String {
    match display_name {
        Some(name) if !name.is_empty() => name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect(),
        _ => UNKNOWN_FILE_NAME.to_string(),
    }
}

pub struct TomlAssetStore {
    root: PathBuf,
    fs: LocalFs,
}

impl TomlAssetStore {
    /// `root` may be relative; `.` components are dropped so stored paths
    /// compare equal however the root was spelled.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: without_cur_dir(&root.into()),
            fs: LocalFs::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join("assets.toml")
    }

    /// Directory holding imported files of `kind`
    pub fn kind_dir(&self, kind: AssetKind) -> PathBuf {
        self.root.join(kind.storage_dir())
    }

    fn lock_path(&self) -> PathBuf {
        self.index_path().with_extension("lock")
    }

    /// Normalized `path` if it names a file directly inside the kind directory
    fn ensure_private(&self, kind: AssetKind, path: &Path) -> StoreResult<PathBuf> {
        let normalized = without_cur_dir(path);
        let escapes = normalized
            .components()
            .any(|c| matches!(c, Component::ParentDir));
        let in_dir = normalized.parent() == Some(self.kind_dir(kind).as_path());
        if escapes || !in_dir {
            return Err(StoreError::OutsidePrivateStorage {
                path: path.to_path_buf(),
                kind,
            });
        }
        Ok(normalized)
    }

    fn with_lock<T>(&self, f: impl FnOnce() -> StoreResult<T>) -> StoreResult<T> {
        fs::create_dir_all(&self.root).map_err(access)?;
        let lock_file = File::create(self.lock_path()).map_err(access)?;
        lock_file.lock_exclusive().map_err(access)?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }

    fn load_index(&self) -> StoreResult<TomlAssetIndex> {
        let path = self.index_path();
        if !self.fs.exists(&path) {
            return Ok(TomlAssetIndex::new());
        }

        let content = self.fs.read(&path).map_err(access)?;
        toml::from_str(&content).map_err(|e| StoreError::Corrupted {
            path,
            message: e.to_string(),
        })
    }

    fn save_index(&self, index: &TomlAssetIndex) -> StoreResult<()> {
        let content = toml::to_string_pretty(index).map_err(access)?;
        self.fs.write(&self.index_path(), &content).map_err(access)
    }
}

impl AssetStore for TomlAssetStore {
    fn copy_to_private_storage(
        &self,
        source: &mut dyn ContentSource,
        kind: AssetKind,
    ) -> StoreResult<PathBuf> {
        source.acquire_persistent_read()?;

        let name = sanitize_file_name(source.display_name().as_deref());
        let copy_error = |e: io::Error| StoreError::Copy {
            name: name.clone(),
            source: e,
        };

        let dir = self.kind_dir(kind);
        fs::create_dir_all(&dir).map_err(copy_error)?;

        // Dropping the temp file on any error path removes the partial copy
        let mut tmp = NamedTempFile::new_in(&dir).map_err(copy_error)?;
        {
            let mut reader = source.open()?;
            io::copy(&mut reader, &mut tmp).map_err(copy_error)?;
        }
        tmp.as_file().sync_all().map_err(copy_error)?;

        let mut millis = Utc::now().timestamp_millis();
        for _ in 0..MAX_NAME_ATTEMPTS {
            let target = dir.join(format!("{}_{}", millis, name));
            match tmp.persist_noclobber(&target) {
                Ok(_) => {
                    log::debug!("copied '{}' to {}", name, target.display());
                    return Ok(target);
                }
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                    tmp = e.file;
                    millis += 1;
                }
                Err(e) => return Err(copy_error(e.error)),
            }
        }

        Err(copy_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "no free file name in private storage",
        )))
    }

    fn record_path(&self, kind: AssetKind, path: &Path) -> StoreResult<()> {
        let path = self.ensure_private(kind, path)?;
        self.with_lock(|| {
            let mut index = self.load_index()?;
            if index.paths_mut(kind).insert(path.clone()) {
                self.save_index(&index)?;
                log::debug!("recorded {} {}", kind, path.display());
            }
            Ok(())
        })
    }

    fn list_paths(&self, kind: AssetKind) -> StoreResult<Vec<PathBuf>> {
        Ok(self.load_index()?.paths(kind).iter().cloned().collect())
    }

    fn delete(&self, kind: AssetKind, path: &Path) -> StoreResult<DeleteOutcome> {
        let path = self.ensure_private(kind, path)?;
        let path = path.as_path();
        self.with_lock(|| {
            let file_removed = match fs::remove_file(path) {
                Ok(()) => true,
                Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                Err(e) => {
                    return Err(StoreError::Delete {
                        path: path.to_path_buf(),
                        source: e,
                    })
                }
            };

            let mut index = self.load_index()?;
            let record_removed = index.paths_mut(kind).remove(path);
            if record_removed {
                self.save_index(&index)?;
            }

            log::debug!(
                "deleted {} {} (file: {}, record: {})",
                kind,
                path.display(),
                file_removed,
                record_removed
            );
            Ok(DeleteOutcome {
                file_removed,
                record_removed,
            })
        })
    }
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn access(e: impl std::fmt::Display) -> StoreError {
    StoreError::Access {
        message: e.to_string(),
    }
}
