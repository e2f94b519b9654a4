//! One-way hash chain over time indices.
//!
//! key@(i+1) = SHA-256(key@i)
//!
//! Forward-only: knowing key@N lets you derive key@(N+1) but not
//! key@(N-1).

use std::fmt;

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{KeyRatchetError, Result};

/// Length of chain keys in bytes.
pub const KEY_LEN: usize = 32;

/// A key bound to a point on the chain.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct TimeIndexedKey {
    #[zeroize(skip)]
    time_index: i64,
    key: [u8; KEY_LEN],
}

impl TimeIndexedKey {
    /// Bind `key` to `time_index`.
    pub fn new(time_index: i64, key: [u8; KEY_LEN]) -> Self {
        Self { time_index, key }
    }

    /// Index this key belongs to.
    pub fn time_index(&self) -> i64 {
        self.time_index
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    /// Advance this key to `target_index`.  See [`forward`].
    pub fn forward(&self, target_index: i64) -> Result<TimeIndexedKey> {
        forward(target_index, self)
    }
}

/// Advance `current` to `target_index` by hashing once per step.
///
/// `target_index == current.time_index()` returns an equal key.  Moving
/// backwards fails with [`KeyRatchetError::InvalidArgument`].
pub fn forward(target_index: i64, current: &TimeIndexedKey) -> Result<TimeIndexedKey> {
    let count = target_index
        .checked_sub(current.time_index)
        .ok_or_else(|| {
            KeyRatchetError::InvalidArgument(format!(
                "cannot forward from index {} to {target_index}: step count overflows",
                current.time_index
            ))
        })?;

    if count < 0 {
        return Err(KeyRatchetError::InvalidArgument(format!(
            "cannot forward to a previous time index ({} -> {target_index})",
            current.time_index
        )));
    }

    tracing::debug!(
        from = current.time_index,
        to = target_index,
        steps = count,
        "advancing time-indexed key"
    );

    Ok(TimeIndexedKey {
        time_index: target_index,
        key: hash_multiple(count.unsigned_abs(), &current.key),
    })
}

/// Apply SHA-256 to `data` `count` times.
pub fn hash_multiple(count: u64, data: &[u8; KEY_LEN]) -> [u8; KEY_LEN] {
    let mut out = *data;
    for _ in 0..count {
        out = Sha256::digest(out).into();
    }
    out
}

impl PartialEq for TimeIndexedKey {
    fn eq(&self, other: &Self) -> bool {
        self.time_index == other.time_index && bool::from(self.key.ct_eq(&other.key))
    }
}

impl Eq for TimeIndexedKey {}

impl fmt::Debug for TimeIndexedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeIndexedKey")
            .field("time_index", &self.time_index)
            .field("key", &"[REDACTED]")
            .finish()
    }
}
