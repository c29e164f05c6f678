//! Asset Identifier Value Object
//!
//! The persisted pointer to the active font, image or sound. Stored as
//! `res:<id>` or `file:<path>` and decoded once, here.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const RESOURCE_PREFIX: &str = "res:";
const FILE_PREFIX: &str = "file:";

/// Compile-time identifier of a packaged asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Malformed identifier text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier '{0}' has no 'res:' or 'file:' prefix")]
    MissingPrefix(String),

    #[error("identifier '{value}' has unknown prefix '{prefix}'")]
    UnknownPrefix { prefix: String, value: String },

    #[error("identifier '{0}' does not carry a numeric resource id")]
    InvalidResourceId(String),

    #[error("identifier '{0}' has an empty file path")]
    EmptyPath(String),
}

/// Where the active asset lives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AssetIdentifier {
    /// Packaged asset, by resource id
    Resource(ResourceId),
    /// User-imported asset, by path in private storage
    File(PathBuf),
}

impl AssetIdentifier {
    pub fn resource(id: u32) -> Self {
        AssetIdentifier::Resource(ResourceId(id))
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        AssetIdentifier::File(path.into())
    }

    pub fn as_resource(&self) -> Option<ResourceId> {
        match self {
            AssetIdentifier::Resource(id) => Some(*id),
            AssetIdentifier::File(_) => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            AssetIdentifier::Resource(_) => None,
            AssetIdentifier::File(path) => Some(path),
        }
    }
}

impl std::fmt::Display for AssetIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetIdentifier::Resource(id) => write!(f, "{}{}", RESOURCE_PREFIX, id),
            AssetIdentifier::File(path) => write!(f, "{}{}", FILE_PREFIX, path.display()),
        }
    }
}

impl FromStr for AssetIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix(RESOURCE_PREFIX) {
            return id
                .trim()
                .parse::<u32>()
                .map(AssetIdentifier::resource)
                .map_err(|_| IdentifierError::InvalidResourceId(s.to_string()));
        }

        if let Some(path) = s.strip_prefix(FILE_PREFIX) {
            if path.is_empty() {
                return Err(IdentifierError::EmptyPath(s.to_string()));
            }
            return Ok(AssetIdentifier::file(path));
        }

        match s.split_once(':') {
            Some((prefix, _)) if !prefix.is_empty() => Err(IdentifierError::UnknownPrefix {
                prefix: prefix.to_string(),
                value: s.to_string(),
            }),
            _ => Err(IdentifierError::MissingPrefix(s.to_string())),
        }
    }
}

impl TryFrom<String> for AssetIdentifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssetIdentifier> for String {
    fn from(id: AssetIdentifier) -> Self {
        id.to_string()
    }
}
