//! CLI error types and exit codes.

use tessel_core::{CommandError, ConfigError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - settings, I/O, or output failures
    pub const GENERAL_ERROR: i32 = 1;
    /// A window command could not be parsed or was rejected by the layout
    pub const COMMAND_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A window command failed
    #[error("Command failed: {command}: {source}")]
    Command {
        /// The command as typed
        command: String,
        /// Why it failed
        source: CommandError,
    },

    /// A command script could not be parsed
    #[error("Script error: {0}")]
    Script(CommandError),

    /// Output could not be produced
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (settings, output, IO)
    /// - 2: Command failure (parse error or rejected by the layout)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Command { .. } | Self::Script(_) => exit_codes::COMMAND_FAILURE,
            Self::Config(_) | Self::Output(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
