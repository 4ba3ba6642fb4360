// External crates
use clap::Parser;
use tracing::debug;

// Internal imports
use edge_core::{edge_error, edge_error_hint, edge_warning};
use edge_messages::{msg, MESSAGES};

// Local modules
mod cli;
mod commands;
mod error;

use cli::Args;
use commands::execute_command;

fn main() {
    let args = Args::parse();

    // Diagnostics stay quiet unless asked for; RUST_LOG still overrides.
    let default_filter = if args.debug { "debug" } else { "warn" };
    if let Err(e) = edge_logging::init_with_defaults(default_filter) {
        edge_warning!("{}", e);
    }

    debug!(command = ?args.command, "Starting edge command");

    if let Err(e) = execute_command(args) {
        edge_error!("{}", msg!(MESSAGES.error_generic, error = e.to_string()));
        if let Some(hint) = e.hint() {
            edge_error_hint!("{}", hint);
        }
        std::process::exit(1);
    }
}
