use clap::Parser;
use keyratchet::cli::commands;
use keyratchet::cli::{init_logging, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    init_logging(&cli.log, &cli.log_format);

    let result = match cli.command {
        Commands::Wrap {
            ref subject,
            ref secret,
            ref output,
        } => commands::wrap::execute(subject.as_deref(), secret.as_deref(), output.as_deref()),
        Commands::Unwrap {
            ref file,
            ref subject,
        } => commands::unwrap::execute(file, subject.as_deref()),
        Commands::Derive { ref tag } => commands::derive::execute(tag),
        Commands::Index { at_ms, at_secs } => commands::index::execute(at_ms, at_secs),
        Commands::Forward { from, ref key, to } => commands::forward::execute(from, key, to),
        Commands::Completions { ref shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        keyratchet::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
