//! A picked file on local disk
//!
//! Used by the CLI in place of a platform picker handle.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::domain::ports::{ContentSource, SourceError};

#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for LocalFileSource {
    fn display_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    fn mime_type(&self) -> Option<String> {
        let ext = self.path.extension()?.to_str()?.to_ascii_lowercase();
        guess_mime(&ext).map(str::to_string)
    }

    fn open(&mut self) -> Result<Box<dyn Read + '_>, SourceError> {
        let name = self.path.display().to_string();
        match File::open(&self.path) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Err(SourceError::PermissionDenied(name))
            }
            Err(e) => Err(SourceError::Io { name, source: e }),
        }
    }
}

fn guess_mime(ext: &str) -> Option<&'static str> {
    Some(match ext {
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        _ => return None,
    })
}
