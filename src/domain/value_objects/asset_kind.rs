//! Asset Kind Value Object
//!
//! Partitions private storage, the imported-asset index and the MIME filter
//! handed to the file picker.

use serde::{Deserialize, Serialize};

/// Kind of selectable asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Typefaces for the lock-screen title
    Font,
    /// Center image and crack overlays
    Image,
    /// Sounds played while locked
    Sound,
}

impl AssetKind {
    /// All kinds, in display order
    pub const ALL: [AssetKind; 3] = [AssetKind::Font, AssetKind::Image, AssetKind::Sound];

    /// Name used for logging and CLI arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Font => "font",
            AssetKind::Image => "image",
            AssetKind::Sound => "sound",
        }
    }

    /// Subdirectory of the private storage root holding imported files
    pub fn storage_dir(&self) -> &'static str {
        match self {
            AssetKind::Font => "fonts",
            AssetKind::Image => "images",
            AssetKind::Sound => "sounds",
        }
    }

    /// MIME filter passed to the content picker
    pub fn mime_filter(&self) -> &'static str {
        match self {
            AssetKind::Font => "font/*",
            AssetKind::Image => "image/*",
            AssetKind::Sound => "audio/*",
        }
    }

    /// Parse from string (accepts singular and plural forms)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "font" | "fonts" => Some(AssetKind::Font),
            "image" | "images" => Some(AssetKind::Image),
            "sound" | "sounds" => Some(AssetKind::Sound),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
