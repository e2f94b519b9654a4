//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::{Parser, ValueEnum};
use zeroize::Zeroizing;

use crate::crypto::Passphrase;
use crate::errors::{KeyRatchetError, Result};

/// Environment variable checked before prompting for a passphrase.
pub const PASSPHRASE_ENV: &str = "KEYRATCHET_PASSPHRASE";

/// keyratchet CLI: passphrase-derived keys and a forward-secure key chain.
#[derive(Parser)]
#[command(
    name = "keyratchet",
    about = "Passphrase key wrapping and forward-secure time-indexed keys",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "KEYRATCHET_LOG", default_value = "warn", global = true)]
    pub log: String,

    /// Log format (json, text)
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Wrap a secret key under a passphrase
    Wrap {
        /// Subject the key belongs to (e.g. a username)
        #[arg(short, long)]
        subject: Option<String>,
        /// Secret key as base64 (a random 32-byte key is generated if omitted)
        #[arg(long)]
        secret: Option<String>,
        /// Write the wrapped-key JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Recover a secret key from a wrapped-key file
    Unwrap {
        /// Path to the wrapped-key JSON file
        file: String,
        /// Subject the key was wrapped for
        #[arg(short, long)]
        subject: Option<String>,
    },

    /// Derive a usage-scoped key from a passphrase
    Derive {
        /// Usage tag, e.g. storage-encryption:alice or server-login:example.com
        tag: String,
    },

    /// Show the time index for now or a given instant
    Index {
        /// Unix time in milliseconds
        #[arg(long, conflicts_with = "at_secs", allow_hyphen_values = true)]
        at_ms: Option<i64>,
        /// Unix time in seconds
        #[arg(long, allow_hyphen_values = true)]
        at_secs: Option<i64>,
    },

    /// Advance a time-indexed key to a later index
    Forward {
        /// Index the given key belongs to
        #[arg(long, allow_hyphen_values = true)]
        from: i64,
        /// Key as base64 (32 bytes)
        #[arg(long)]
        key: String,
        /// Target index (defaults to the current index)
        #[arg(long, allow_hyphen_values = true)]
        to: Option<i64>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Json,
    Text,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `--log`.  Logs go to stderr so they
/// never mix with key material printed on stdout.
pub fn init_logging(level: &str, format: &LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Get the passphrase, trying in order:
/// 1. `KEYRATCHET_PASSPHRASE` env var (CI/CD)
/// 2. Interactive prompt
pub fn prompt_passphrase() -> Result<Passphrase> {
    if let Some(pw) = passphrase_from_env() {
        return Passphrase::new(pw.as_str());
    }

    let pw = Zeroizing::new(
        dialoguer::Password::new()
            .with_prompt("Enter passphrase")
            .interact()
            .map_err(|e| KeyRatchetError::CommandFailed(format!("passphrase prompt: {e}")))?,
    );
    Passphrase::new(pw.as_str())
}

/// Prompt for a new passphrase with confirmation (used by `wrap`).
///
/// Also respects `KEYRATCHET_PASSPHRASE` for scripted/CI usage.
pub fn prompt_new_passphrase() -> Result<Passphrase> {
    if let Some(pw) = passphrase_from_env() {
        return Passphrase::new(pw.as_str());
    }

    loop {
        let pw = Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Choose passphrase")
                .with_confirmation(
                    "Confirm passphrase",
                    "Passphrases do not match, try again",
                )
                .interact()
                .map_err(|e| KeyRatchetError::CommandFailed(format!("passphrase prompt: {e}")))?,
        );

        match Passphrase::new(pw.as_str()) {
            Ok(passphrase) => return Ok(passphrase),
            Err(e) => output::warning(&format!("{e}. Try again.")),
        }
    }
}

fn passphrase_from_env() -> Option<Zeroizing<String>> {
    std::env::var(PASSPHRASE_ENV)
        .ok()
        .filter(|pw| !pw.is_empty())
        .map(Zeroizing::new)
}

/// Decode a base64 argument, naming it in the error.
pub fn decode_base64(what: &str, value: &str) -> Result<Zeroizing<Vec<u8>>> {
    BASE64
        .decode(value.trim())
        .map(Zeroizing::new)
        .map_err(|e| KeyRatchetError::InvalidArgument(format!("{what} is not valid base64: {e}")))
}

/// Encode bytes for display.
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}
