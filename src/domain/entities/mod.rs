//! Domain Entities
//!
//! - `Asset` - A packaged or user-imported font, image or sound

mod asset;

pub use asset::Asset;
