//! Common test utilities for LookAtMe scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated data directory plus helpers to run the CLI
//! - Test doubles for the host-side ports (haptics, media, presenter)

pub mod env;
pub mod fakes;

pub use env::*;
pub use fakes::*;
