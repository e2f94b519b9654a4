//! AES-256-GCM-SIV authenticated encryption with a managed nonce.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `decrypt` splits the nonce back out
//! before decrypting.  GCM-SIV is nonce-misuse resistant: a repeated
//! nonce only reveals whether two plaintexts were equal.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm_siv::aead::{Aead, KeyInit, OsRng};
use aes_gcm_siv::{AeadCore, Aes256GcmSiv, Nonce};
use zeroize::Zeroizing;

use crate::errors::{KeyRatchetError, Result};

/// Identifier recorded in wrapped-key records.
pub const AEAD_ALGO_NAME: &str = "aes-256-gcm-siv";

/// Size of the AES-256-GCM-SIV nonce in bytes.
const NONCE_LEN: usize = 12;

/// Required key length in bytes.
const KEY_LEN: usize = 32;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    if key.len() != KEY_LEN {
        return Err(KeyRatchetError::InvalidArgument(format!(
            "AES-256-GCM-SIV key must be {KEY_LEN} bytes, got {}",
            key.len()
        )));
    }
    let cipher = Aes256GcmSiv::new_from_slice(key)
        .map_err(|e| KeyRatchetError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256GcmSiv::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| KeyRatchetError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Any integrity failure, including input too short to hold a nonce,
/// is reported as [`KeyRatchetError::AuthenticationFailure`].
pub fn decrypt(key: &[u8], ciphertext_with_nonce: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if key.len() != KEY_LEN {
        return Err(KeyRatchetError::InvalidArgument(format!(
            "AES-256-GCM-SIV key must be {KEY_LEN} bytes, got {}",
            key.len()
        )));
    }
    if ciphertext_with_nonce.len() < NONCE_LEN {
        return Err(KeyRatchetError::AuthenticationFailure);
    }

    let (nonce_bytes, ciphertext) = ciphertext_with_nonce.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher =
        Aes256GcmSiv::new_from_slice(key).map_err(|_| KeyRatchetError::AuthenticationFailure)?;

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| KeyRatchetError::AuthenticationFailure)?;

    Ok(Zeroizing::new(plaintext))
}
