//! Passphrase-based key wrapping.
//!
//! Wrapping a secret key for `subject`:
//!
//! 1. HKDF the passphrase under `storage-encryption:<subject>`.
//! 2. Stretch that key with scrypt and a fresh random 16-byte salt.
//! 3. Encrypt the secret under the stretched key with AES-256-GCM-SIV.
//!
//! The resulting [`WrappedKeyRecord`] names both algorithms.  Unwrapping
//! refuses any record whose identifiers differ from the ones this crate
//! writes, before any key material is touched.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::encryption::{self, AEAD_ALGO_NAME};
use super::kdf::{self, SALT_LEN, SCRYPT_N16_R8_P1};
use super::passphrase::Passphrase;
use super::usage::UsageTag;
use crate::errors::{KeyRatchetError, Result};

/// A secret key protected by a passphrase.
///
/// Serializes to JSON as
/// `{"hashAlgo": ..., "salt": "<base64>", "aeadAlgo": ..., "wrappedKey": "<base64>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedKeyRecord {
    /// Stretching algorithm and its fixed parameters.
    pub hash_algo: String,

    /// scrypt salt (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,

    /// Authenticated encryption construction.
    pub aead_algo: String,

    /// Nonce, ciphertext and tag (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub wrapped_key: Vec<u8>,
}

impl WrappedKeyRecord {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| KeyRatchetError::SerializationError(format!("wrapped key: {e}")))
    }

    /// Parse a record from JSON.  Algorithm ids are not checked here.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| KeyRatchetError::SerializationError(format!("wrapped key: {e}")))
    }
}

/// Wrap `key` under `passphrase` for `subject`.
pub fn wrap_key(subject: &str, passphrase: &Passphrase, key: &[u8]) -> Result<WrappedKeyRecord> {
    let usage = UsageTag::for_storage_encryption(subject)?;
    let derived = passphrase.derive_key(&usage)?;

    let salt = kdf::generate_salt();
    let stretched = kdf::stretch_key(derived.as_bytes(), &salt)?;
    let wrapped_key = encryption::encrypt(&stretched[..], key)?;

    tracing::debug!(
        usage = derived.usage_tag(),
        hash_algo = SCRYPT_N16_R8_P1,
        aead_algo = AEAD_ALGO_NAME,
        "wrapped key"
    );

    Ok(WrappedKeyRecord {
        hash_algo: SCRYPT_N16_R8_P1.to_string(),
        salt: salt.to_vec(),
        aead_algo: AEAD_ALGO_NAME.to_string(),
        wrapped_key,
    })
}

/// Recover the secret key from `record`.
///
/// Fails with [`KeyRatchetError::UnsupportedAlgorithm`] for unknown
/// algorithm ids and [`KeyRatchetError::AuthenticationFailure`] for a
/// wrong passphrase, wrong subject, or tampered record.
pub fn unwrap_key(
    subject: &str,
    passphrase: &Passphrase,
    record: &WrappedKeyRecord,
) -> Result<Zeroizing<Vec<u8>>> {
    if record.hash_algo != SCRYPT_N16_R8_P1 {
        tracing::debug!(hash_algo = %record.hash_algo, "rejected wrapped key");
        return Err(KeyRatchetError::UnsupportedAlgorithm(format!(
            "hash algorithm '{}'",
            record.hash_algo
        )));
    }
    if record.aead_algo != AEAD_ALGO_NAME {
        tracing::debug!(aead_algo = %record.aead_algo, "rejected wrapped key");
        return Err(KeyRatchetError::UnsupportedAlgorithm(format!(
            "AEAD algorithm '{}'",
            record.aead_algo
        )));
    }
    if record.salt.len() != SALT_LEN {
        return Err(KeyRatchetError::InvalidArgument(format!(
            "salt must be {SALT_LEN} bytes, got {}",
            record.salt.len()
        )));
    }

    let usage = UsageTag::for_storage_encryption(subject)?;
    let derived = passphrase.derive_key(&usage)?;
    let stretched = kdf::stretch_key(derived.as_bytes(), &record.salt)?;
    let key = encryption::decrypt(&stretched[..], &record.wrapped_key)?;

    tracing::debug!(usage = derived.usage_tag(), "unwrapped key");

    Ok(key)
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
