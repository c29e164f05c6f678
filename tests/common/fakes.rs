//! Host-side test doubles
//!
//! Each fake records into shared state so a scenario can inspect it while
//! the session still owns the fake.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lookatme::domain::ports::{Haptics, MediaError, MediaPlayer, Presenter};
use lookatme::domain::services::{ImageLayer, TextLayer};
use lookatme::{AssetIdentifier, LoopMode};

/// Everything the fakes observed, in order
#[derive(Debug, Default)]
pub struct HostLog {
    pub vibrations: Vec<(Duration, u8)>,
    pub played: Vec<(AssetIdentifier, LoopMode)>,
    pub stops: usize,
    pub text: Option<TextLayer>,
    pub image: Option<ImageLayer>,
}

pub type SharedLog = Rc<RefCell<HostLog>>;

pub fn shared_log() -> SharedLog {
    Rc::new(RefCell::new(HostLog::default()))
}

pub struct FakeHaptics(pub SharedLog);

impl Haptics for FakeHaptics {
    fn vibrate(&mut self, duration: Duration, amplitude: u8) {
        self.0.borrow_mut().vibrations.push((duration, amplitude));
    }
}

pub struct FakePlayer(pub SharedLog);

impl MediaPlayer for FakePlayer {
    fn play(&mut self, source: &AssetIdentifier, loop_mode: LoopMode) -> Result<(), MediaError> {
        self.0.borrow_mut().played.push((source.clone(), loop_mode));
        Ok(())
    }

    fn stop(&mut self) {
        self.0.borrow_mut().stops += 1;
    }
}

pub struct FakeScreen(pub SharedLog);

impl Presenter for FakeScreen {
    fn show_text(&mut self, layer: &TextLayer) {
        self.0.borrow_mut().text = Some(layer.clone());
    }

    fn hide_text(&mut self) {
        self.0.borrow_mut().text = None;
    }

    fn show_image(&mut self, layer: &ImageLayer) {
        self.0.borrow_mut().image = Some(layer.clone());
    }

    fn hide_image(&mut self) {
        self.0.borrow_mut().image = None;
    }
}
