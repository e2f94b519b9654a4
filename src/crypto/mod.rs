//! Passphrase cryptography for keyratchet.
//!
//! This module provides:
//! - Usage tags for domain separation (`usage`)
//! - Passphrase validation (`passphrase`)
//! - HKDF-SHA256 passphrase key derivation (`keys`)
//! - scrypt key stretching (`kdf`)
//! - AES-256-GCM-SIV encryption and decryption (`encryption`)
//! - The passphrase key-wrap protocol (`wrap`)

pub mod encryption;
pub mod kdf;
pub mod keys;
pub mod passphrase;
pub mod usage;
pub mod wrap;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{wrap_key, unwrap_key, Passphrase, UsageTag, ...};
pub use encryption::{decrypt, encrypt, AEAD_ALGO_NAME};
pub use kdf::{generate_salt, stretch_key, SCRYPT_N16_R8_P1};
pub use keys::{derive_key, generate_key, DerivedKey};
pub use passphrase::Passphrase;
pub use usage::UsageTag;
pub use wrap::{unwrap_key, wrap_key, WrappedKeyRecord};
