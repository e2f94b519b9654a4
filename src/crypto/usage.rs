//! Usage tags for domain-separated passphrase key derivation.
//!
//! A tag is a `type:identifier` pair.  Its canonical string is fed to
//! HKDF as the `info` parameter, so two tags that render differently
//! always derive different keys from the same passphrase.

use std::fmt;
use std::str::FromStr;

use crate::errors::{KeyRatchetError, Result};

/// Tag type for keys that encrypt data at rest.
pub const STORAGE_ENCRYPTION: &str = "storage-encryption";

/// Tag type for keys used to log in to a server.
pub const SERVER_LOGIN: &str = "server-login";

/// A validated usage tag.
///
/// Only constructible through [`UsageTag::for_storage_encryption`],
/// [`UsageTag::for_server_login`], or [`UsageTag::parse`], all of which
/// reject an empty subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsageTag {
    /// `storage-encryption:<username>`
    StorageEncryption(String),
    /// `server-login:<host>`
    ServerLogin(String),
}

impl UsageTag {
    /// Tag for encrypting a user's data at rest.
    pub fn for_storage_encryption(username: &str) -> Result<Self> {
        Ok(Self::StorageEncryption(validate_subject(username)?))
    }

    /// Tag for authenticating against a server.
    pub fn for_server_login(host: &str) -> Result<Self> {
        Ok(Self::ServerLogin(validate_subject(host)?))
    }

    /// Parse a canonical `type:identifier` string.
    ///
    /// Splits on the first `:`; everything after it is the identifier,
    /// so identifiers may themselves contain colons.
    pub fn parse(text: &str) -> Result<Self> {
        let (kind, identifier) = text
            .split_once(':')
            .ok_or_else(|| invalid_tag(text, "missing ':' separator"))?;

        if identifier.is_empty() {
            return Err(invalid_tag(text, "missing identifier"));
        }

        match kind {
            STORAGE_ENCRYPTION => Ok(Self::StorageEncryption(identifier.to_string())),
            SERVER_LOGIN => Ok(Self::ServerLogin(identifier.to_string())),
            other => Err(invalid_tag(text, &format!("unknown type '{other}'"))),
        }
    }

    /// The type half of the tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StorageEncryption(_) => STORAGE_ENCRYPTION,
            Self::ServerLogin(_) => SERVER_LOGIN,
        }
    }

    /// The subject half of the tag.
    pub fn identifier(&self) -> &str {
        match self {
            Self::StorageEncryption(id) | Self::ServerLogin(id) => id,
        }
    }
}

impl fmt::Display for UsageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.identifier())
    }
}

impl FromStr for UsageTag {
    type Err = KeyRatchetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn validate_subject(subject: &str) -> Result<String> {
    if subject.is_empty() {
        return Err(KeyRatchetError::InvalidArgument(
            "usage tag subject cannot be empty".into(),
        ));
    }
    Ok(subject.to_string())
}

fn invalid_tag(text: &str, reason: &str) -> KeyRatchetError {
    KeyRatchetError::InvalidArgument(format!("invalid usage tag '{text}': {reason}"))
}
