//! ticklist - terminal task list
//!
//! A small task list for the terminal: a persistent JSON-backed store behind
//! one-shot subcommands and an interactive full-screen list view.

use clap::Parser;
use ticklist::cli::Cli;
use ticklist::output::{emit_error, infer_command_name_from_args};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Log lines go to stderr so --json stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter())
        .init();

    let command = infer_command_name_from_args();
    let cli = Cli::parse();
    let json = cli.json;
    if let Err(err) = cli.run() {
        let _ = emit_error(&command, &err, json);
        std::process::exit(err.exit_code());
    }
}

/// Logging is opt-in through `RUST_LOG`; an unset, invalid, or oversized
/// value means "off" so startup never fails on the environment.
fn log_filter() -> EnvFilter {
    let Ok(raw) = std::env::var("RUST_LOG") else {
        return EnvFilter::new("off");
    };
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > 4096 {
        return EnvFilter::new("off");
    }
    EnvFilter::try_new(raw).unwrap_or_else(|_| EnvFilter::new("off"))
}
