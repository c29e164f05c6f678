//! Presenter port - the view layer the appearance plan is applied to

use crate::domain::services::appearance::{ImageLayer, TextLayer};

/// Lock-screen view surface
pub trait Presenter {
    fn show_text(&mut self, layer: &TextLayer);
    fn hide_text(&mut self);
    fn show_image(&mut self, layer: &ImageLayer);
    fn hide_image(&mut self);
}
