//! Time-bucketed, forward-only key chain.
//!
//! - [`TimeIndexedScheme`] maps wall-clock time onto fixed-width bucket
//!   indices (`scheme`).
//! - [`TimeIndexedKey`] advances a 32-byte key across indices by repeated
//!   SHA-256, so a later key never reveals an earlier one (`key`).

pub mod key;
pub mod scheme;

pub use key::{forward, hash_multiple, TimeIndexedKey};
pub use scheme::{TimeIndexedScheme, MAX_SAFE_INTEGER};
