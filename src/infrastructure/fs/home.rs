//! Private storage root
//!
//! Everything LookAtMe persists (settings, the imported-asset index and the
//! imported files) lives under one directory.

use std::path::PathBuf;

/// Environment variable overriding the data root (tests, CI, custom installs).
pub const LOOKATME_HOME_VAR: &str = "LOOKATME_HOME";

/// Resolve the data root.
///
/// - `$LOOKATME_HOME` when set
/// - otherwise `<platform data dir>/lookatme`
/// - `None` if neither can be resolved
pub fn lookatme_data_dir() -> Option<PathBuf> {
    std::env::var(LOOKATME_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|d| d.join("lookatme")))
}

/// Well-known locations under the data root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join("settings.toml")
    }

    pub fn asset_index(&self) -> PathBuf {
        self.root.join("assets.toml")
    }
}
