//! Passphrase key derivation using HKDF-SHA256.
//!
//! A passphrase is expanded into a 256-bit key whose `info` parameter is
//! the canonical usage tag, e.g. `"storage-encryption:alice"`.  The salt
//! is empty: the key has to be reconstructible from the passphrase and
//! tag alone, and separation between purposes comes from the tag.

use std::fmt;

use hkdf::Hkdf;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::usage::UsageTag;
use crate::errors::{KeyRatchetError, Result};

/// Length of derived keys (256 bits).
pub const KEY_LEN: usize = 32;

/// HKDF salt for passphrase derivation.
const EMPTY_SALT: &[u8] = &[];

/// Derive a usage-scoped key from raw passphrase bytes.
///
/// Deterministic: the same passphrase and tag always give the same key.
pub fn derive_key(passphrase: &[u8], usage: &UsageTag) -> Result<DerivedKey> {
    let tag = usage.to_string();
    let key = hkdf_derive(passphrase, tag.as_bytes())?;
    Ok(DerivedKey {
        usage_tag: tag,
        key,
    })
}

/// Generate a random 32-byte secret key.
pub fn generate_key() -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    rand::rng().fill_bytes(&mut key[..]);
    key
}

/// Internal helper: HKDF-SHA256 extract-and-expand with an empty salt.
fn hkdf_derive(ikm: &[u8], info: &[u8]) -> Result<[u8; KEY_LEN]> {
    let hk = Hkdf::<Sha256>::new(Some(EMPTY_SALT), ikm);

    let mut okm = [0u8; KEY_LEN];
    hk.expand(info, &mut okm)
        .map_err(|e| KeyRatchetError::KeyDerivationFailed(format!("HKDF expand failed: {e}")))?;

    Ok(okm)
}

/// A 32-byte key bound to the usage tag it was derived for.
///
/// The key bytes are wiped from memory when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    #[zeroize(skip)]
    usage_tag: String,
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Canonical usage tag this key was derived for.
    pub fn usage_tag(&self) -> &str {
        &self.usage_tag
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.usage_tag == other.usage_tag && bool::from(self.key.ct_eq(&other.key))
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("usage_tag", &self.usage_tag)
            .field("key", &"[REDACTED]")
            .finish()
    }
}
