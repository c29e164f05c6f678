//! Domain Policies
//!
//! Business rules that govern behavior. Pure functions, no I/O.

mod integrity;

pub use integrity::{
    signature_digest, IntegrityPolicy, IntegrityVerdict, TamperReason, OFFICIAL_PACKAGE_NAME,
};
