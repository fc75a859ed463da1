//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Tessel window layout harness
#[derive(Parser)]
#[command(name = "tessel")]
#[command(author, version, about = "Drive Tessel's window layout engine from the command line")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a layout settings file (TOML)
    #[arg(short, long, global = true, env = "TESSEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run window commands and print the resulting layout
    #[command(about = "Apply window commands to a fresh layout and print it")]
    Run {
        /// Screen width in cells
        #[arg(short = 'W', long, default_value_t = 80)]
        width: u16,

        /// Screen height in cells
        #[arg(short = 'H', long, default_value_t = 24)]
        height: u16,

        /// Command to run (repeatable), e.g. -e vsplit -e "wincmd h"
        #[arg(short = 'e', long = "exec", value_name = "COMMAND")]
        commands: Vec<String>,

        /// File with one command per line, run before any -e commands
        #[arg(short, long, value_name = "FILE")]
        script: Option<PathBuf>,

        /// Keep going after a command fails
        #[arg(short, long)]
        keep_going: bool,

        /// Output format for the final layout
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Show the effective window keybindings
    #[command(about = "List window keybindings with user overrides applied")]
    Keys {
        /// Output format for the keybinding list
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Check a settings file without running anything
    #[command(about = "Validate a layout settings file")]
    Check {
        /// Settings file to validate (defaults to --config)
        file: Option<PathBuf>,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate a man page
    #[command(about = "Generate a man page and write it to stdout")]
    Manpage,
}

/// Output format for printed results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Table followed by a character map of the screen
    Map,
    /// JSON
    Json,
}
