//! `keyratchet completions` — generate shell completion scripts.
//!
//! Usage:
//!   keyratchet completions bash > ~/.bash_completion.d/keyratchet
//!   keyratchet completions zsh

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{KeyRatchetError, Result};

/// Execute the `completions` command.
pub fn execute(shell: &str) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "keyratchet", &mut io::stdout());
    Ok(())
}

/// Parse a shell name string into a `Shell` enum.
fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" | "ps" => Ok(Shell::PowerShell),
        other => Err(KeyRatchetError::InvalidArgument(format!(
            "unsupported shell '{other}' — use bash, zsh, fish, or powershell"
        ))),
    }
}
