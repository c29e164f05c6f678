//! Compiled-in packaged asset registry
//!
//! Names and resource ids of the assets bundled with the app, per kind.

use crate::domain::entities::Asset;
use crate::domain::ports::PackagedAssets;
use crate::domain::value_objects::{AssetKind, ResourceId};

const FONTS: &[(&str, u32)] = &[("my_custom_font", 0x7f09_0000)];

const IMAGES: &[(&str, u32)] = &[
    ("animated_image", 0x7f08_0000),
    ("your_png_image", 0x7f08_0001),
    ("crack_1", 0x7f08_0002),
    ("crack_2", 0x7f08_0003),
    ("crack_3", 0x7f08_0004),
];

const SOUNDS: &[(&str, u32)] = &[("background_sound", 0x7f0e_0000)];

/// Overlays the crack effect picks from
const CRACK_OVERLAYS: &[&str] = &["crack_1", "crack_2", "crack_3"];

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

impl BuiltinAssets {
    pub fn new() -> Self {
        Self
    }

    fn table(kind: AssetKind) -> &'static [(&'static str, u32)] {
        match kind {
            AssetKind::Font => FONTS,
            AssetKind::Image => IMAGES,
            AssetKind::Sound => SOUNDS,
        }
    }

    /// Packaged crack overlay images, in registry order
    pub fn crack_overlays(&self) -> Vec<Asset> {
        self.packaged(AssetKind::Image)
            .into_iter()
            .filter(|asset| CRACK_OVERLAYS.contains(&asset.name()))
            .collect()
    }
}

impl PackagedAssets for BuiltinAssets {
    fn packaged(&self, kind: AssetKind) -> Vec<Asset> {
        Self::table(kind)
            .iter()
            .map(|(name, id)| Asset::packaged(*name, ResourceId(*id)))
            .collect()
    }
}
