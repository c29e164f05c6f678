//! Integrity Policy
//!
//! Decides whether the running package is the official build: the package
//! name must match, and when an expected signing digest is configured the
//! first signing certificate must hash to it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Package name of official builds
pub const OFFICIAL_PACKAGE_NAME: &str = "com.geekneuron.lookatme";

/// Base64-encoded SHA-256 digest of a signing certificate
pub fn signature_digest(certificate: &[u8]) -> String {
    STANDARD.encode(Sha256::digest(certificate))
}

/// Why a build was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TamperReason {
    PackageMismatch { found: String },
    MissingSignature,
    SignatureMismatch { found: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityVerdict {
    Trusted,
    Tampered(TamperReason),
}

impl IntegrityVerdict {
    pub fn is_trusted(&self) -> bool {
        matches!(self, IntegrityVerdict::Trusted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityPolicy {
    package_name: String,
    expected_digest: Option<String>,
}

impl IntegrityPolicy {
    /// Policy checking only the package name
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            expected_digest: None,
        }
    }

    /// Also require the given signing-certificate digest
    pub fn with_expected_digest(mut self, digest: impl Into<String>) -> Self {
        self.expected_digest = Some(digest.into());
        self
    }

    pub fn check(&self, package_name: &str, certificates: &[&[u8]]) -> IntegrityVerdict {
        if package_name != self.package_name {
            return IntegrityVerdict::Tampered(TamperReason::PackageMismatch {
                found: package_name.to_string(),
            });
        }

        let Some(expected) = &self.expected_digest else {
            return IntegrityVerdict::Trusted;
        };

        let Some(first) = certificates.first() else {
            return IntegrityVerdict::Tampered(TamperReason::MissingSignature);
        };

        let found = signature_digest(first);
        if &found == expected {
            IntegrityVerdict::Trusted
        } else {
            log::warn!("signing certificate digest mismatch: {}", found);
            IntegrityVerdict::Tampered(TamperReason::SignatureMismatch { found })
        }
    }
}

impl Default for IntegrityPolicy {
    fn default() -> Self {
        Self::new(OFFICIAL_PACKAGE_NAME)
    }
}
