//! File System Implementations
//!
//! Concrete implementation of the FileSystem port and the data-root layout.

mod home;
mod local;

pub use home::{lookatme_data_dir, DataLayout, LOOKATME_HOME_VAR};
pub use local::LocalFs;
