//! ContentSource port - what the system file picker hands back
//!
//! The core only needs a display name, a MIME type and a blocking byte
//! stream. Platform handles may also need a persistent read grant when the
//! selection outlives the picker callback.

use std::io::Read;

use thiserror::Error;

/// Errors raised while reading a picked source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Access to the handle was revoked or never granted
    #[error("permission denied for '{0}'")]
    PermissionDenied(String),

    #[error("failed to open '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// A user-selected piece of content
pub trait ContentSource {
    /// Name the provider reports for the content, if any
    fn display_name(&self) -> Option<String>;

    /// MIME type the provider reports, if any
    fn mime_type(&self) -> Option<String>;

    /// Open the content for a blocking read
    fn open(&mut self) -> Result<Box<dyn Read + '_>, SourceError>;

    /// Ask the provider to keep read access beyond the current call
    fn acquire_persistent_read(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}

/// Presents a content-selection UI filtered by MIME type
pub trait FilePicker {
    /// Returns `None` when the user dismissed the picker
    fn pick(&mut self, mime_filter: &str) -> Option<Box<dyn ContentSource>>;
}
