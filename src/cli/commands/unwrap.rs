//! `keyratchet unwrap` — recover a secret key from a wrapped-key file.

use std::fs;

use crate::cli::{encode_base64, output, prompt_passphrase};
use crate::config::Settings;
use crate::crypto::{unwrap_key, WrappedKeyRecord};
use crate::errors::Result;

/// Execute the `unwrap` command.
pub fn execute(file: &str, subject: Option<&str>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let subject = settings.resolve_subject(subject)?;

    let json = fs::read_to_string(file)?;
    let record = WrappedKeyRecord::from_json(&json)?;

    let passphrase = prompt_passphrase()?;
    let secret = unwrap_key(&subject, &passphrase, &record)?;

    output::value(&encode_base64(&secret));
    Ok(())
}
