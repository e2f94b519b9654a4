//! Low-entropy human passphrases.

use std::fmt;

use zeroize::Zeroizing;

use super::keys::{self, DerivedKey};
use super::usage::UsageTag;
use crate::errors::{KeyRatchetError, Result};

/// Minimum passphrase length, counted in characters.
pub const MIN_PASSPHRASE_LEN: usize = 12;

/// A validated passphrase.
///
/// The text lives in a `Zeroizing` buffer so it is wiped on drop.  Keys
/// derived from it never hold a copy.
pub struct Passphrase {
    text: Zeroizing<String>,
}

impl Passphrase {
    /// Validate and take ownership of a passphrase.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = Zeroizing::new(text.into());
        if text.chars().count() < MIN_PASSPHRASE_LEN {
            return Err(KeyRatchetError::InvalidArgument(format!(
                "passphrase must be at least {MIN_PASSPHRASE_LEN} characters"
            )));
        }
        Ok(Self { text })
    }

    /// Derive the 256-bit key for `usage`.
    pub fn derive_key(&self, usage: &UsageTag) -> Result<DerivedKey> {
        keys::derive_key(self.text.as_bytes(), usage)
    }
}

impl TryFrom<&str> for Passphrase {
    type Error = KeyRatchetError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase([REDACTED])")
    }
}
