//! `keyratchet forward` — advance a time-indexed key.

use crate::chain::{key::KEY_LEN, TimeIndexedKey};
use crate::cli::{decode_base64, encode_base64, output};
use crate::config::Settings;
use crate::errors::{KeyRatchetError, Result};

/// Execute the `forward` command.
pub fn execute(from: i64, key: &str, to: Option<i64>) -> Result<()> {
    let bytes = decode_base64("--key", key)?;
    let key: [u8; KEY_LEN] = bytes.as_slice().try_into().map_err(|_| {
        KeyRatchetError::InvalidArgument(format!(
            "--key must decode to {KEY_LEN} bytes, got {}",
            bytes.len()
        ))
    })?;
    let current = TimeIndexedKey::new(from, key);

    let target = match to {
        Some(index) => index,
        None => {
            let cwd = std::env::current_dir()?;
            Settings::load(&cwd)?.scheme()?.current_index()?
        }
    };

    let advanced = current.forward(target)?;

    output::info(&format!(
        "Advanced key from index {from} to {}",
        advanced.time_index()
    ));
    output::value(&encode_base64(advanced.as_bytes()));
    Ok(())
}
