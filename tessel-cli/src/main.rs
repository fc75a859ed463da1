//! `tessel` - command-line harness for Tessel's window layout engine
//!
//! Applies window commands (`split`, `vsplit`, `wincmd h`, `tabnew`, ...)
//! to a fresh layout and prints the resulting geometry, lists the effective
//! keybindings, and validates settings files.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use tessel_core::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        TracingLevel::Error
    } else {
        TracingLevel::from_verbosity(cli.verbose)
    };
    if let Err(e) = init_tracing(&TracingConfig::new().with_level(level)) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let quiet = cli.quiet;
    if let Err(e) = commands::dispatch(cli) {
        if !quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
