//! `keyratchet wrap` — protect a secret key under a passphrase.

use std::fs;

use crate::cli::{decode_base64, output, prompt_new_passphrase};
use crate::config::Settings;
use crate::crypto::{generate_key, wrap_key};
use crate::errors::{KeyRatchetError, Result};

/// Execute the `wrap` command.
pub fn execute(subject: Option<&str>, secret: Option<&str>, output_path: Option<&str>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let subject = settings.resolve_subject(subject)?;

    // 1. Take the caller's secret, or mint a fresh 32-byte key.
    let secret = match secret {
        Some(b64) => {
            let bytes = decode_base64("--secret", b64)?;
            if bytes.is_empty() {
                return Err(KeyRatchetError::InvalidArgument(
                    "--secret must not be empty".into(),
                ));
            }
            bytes
        }
        None => {
            output::info("No --secret given, generating a random 32-byte key.");
            zeroize::Zeroizing::new(generate_key().to_vec())
        }
    };

    // 2. Wrap it.  scrypt makes this take a noticeable moment.
    let passphrase = prompt_new_passphrase()?;
    let record = wrap_key(&subject, &passphrase, &secret)?;
    let json = record.to_json()?;

    // 3. Emit the record.
    match output_path {
        Some(path) => {
            fs::write(path, format!("{json}\n"))?;
            output::success(&format!("Wrapped key for '{subject}' written to {path}"));
            output::tip(&format!("Run `keyratchet unwrap {path} --subject {subject}` to recover it."));
        }
        None => output::value(&json),
    }

    Ok(())
}
