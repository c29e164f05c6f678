//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AssetLibrary` - Import, list, select and delete fonts, images and sounds
//! - `LockSession` - One lock-screen session: layers, gestures, timers, feedback

pub mod library;
pub mod session;

pub use library::{AssetLibrary, DeleteReport};
pub use session::{LockSession, SessionEvent, TimerPurpose, PRESS_PULSE, UNLOCK_PULSE};
