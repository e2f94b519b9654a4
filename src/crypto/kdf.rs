//! Memory-hard key stretching using scrypt.
//!
//! HKDF is fast, so a passphrase-derived key is run through scrypt before
//! it is used to encrypt anything at rest.  The parameters are fixed and
//! named by [`SCRYPT_N16_R8_P1`]; a wrapped-key record carrying any other
//! identifier is refused.

use rand::RngCore;
use scrypt::Params;
use zeroize::Zeroizing;

use crate::errors::{KeyRatchetError, Result};

/// Identifier for scrypt with N = 2^16, r = 8, p = 1, 32-byte output.
pub const SCRYPT_N16_R8_P1: &str = "scrypt-N16-R8-P1";

/// Length of the scrypt salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the stretched key in bytes (256 bits, for AES-256).
const KEY_LEN: usize = 32;

/// log2 of the scrypt work factor N.
const LOG_N: u8 = 16;

/// scrypt block size.
const BLOCK_SIZE: u32 = 8;

/// scrypt parallelism.
const PARALLELISM: u32 = 1;

/// Stretch `key` with the fixed scrypt parameters.
///
/// This is deliberately slow (about 64 MiB of memory); call it off any
/// latency-sensitive thread.  The same key + salt always produces the
/// same output.
pub fn stretch_key(key: &[u8], salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    let params = Params::new(LOG_N, BLOCK_SIZE, PARALLELISM, KEY_LEN)
        .map_err(|e| KeyRatchetError::KeyDerivationFailed(format!("invalid scrypt params: {e}")))?;

    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    scrypt::scrypt(key, salt, &params, &mut out[..])
        .map_err(|e| KeyRatchetError::KeyDerivationFailed(format!("scrypt failed: {e}")))?;

    Ok(out)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salts_are_fresh() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn stretch_is_deterministic_and_salted() {
        let key = [0x42u8; 32];
        let salt_a = [1u8; SALT_LEN];
        let salt_b = [2u8; SALT_LEN];

        let a1 = stretch_key(&key, &salt_a).unwrap();
        let a2 = stretch_key(&key, &salt_a).unwrap();
        let b = stretch_key(&key, &salt_b).unwrap();

        assert_eq!(*a1, *a2);
        assert_ne!(*a1, *b);
    }
}
