//! `keyratchet derive` — derive a usage-scoped key from a passphrase.

use crate::cli::{encode_base64, output, prompt_passphrase};
use crate::crypto::UsageTag;
use crate::errors::Result;

/// Execute the `derive` command.
pub fn execute(tag: &str) -> Result<()> {
    // Validate the tag before asking for anything secret.
    let usage = UsageTag::parse(tag)?;

    let passphrase = prompt_passphrase()?;
    let key = passphrase.derive_key(&usage)?;

    output::info(&format!("Derived key for '{}'", key.usage_tag()));
    output::value(&encode_base64(key.as_bytes()));
    Ok(())
}
