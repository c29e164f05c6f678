//! Domain Services
//!
//! Stateless or self-contained logic with no I/O of its own:
//! - `AssetCatalog` - merged packaged + imported listing, identifier resolution
//! - `AppearancePlan` - settings to visible layers
//! - `GestureMachine` - long-press unlock / settings reveal
//! - `DeferredActionTimer` - cooperative single-shot scheduler

pub mod appearance;
pub mod catalog;
pub mod gesture;
pub mod timer;

pub use appearance::{
    position_offset, scale_multiplier, AppearancePlan, ImageLayer, Size, SoundCue, TextLayer,
};
pub use catalog::{AssetCatalog, CatalogError};
pub use gesture::{GestureMachine, GestureState, GestureZone, Point, ScreenSize};
pub use timer::{DeferredActionTimer, TimerHandle};
