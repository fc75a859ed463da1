//! Command handler modules for the CLI.

mod check;
mod completions;
mod keys;
mod manpage;
mod run;

use crate::cli::{Cli, Commands};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Run {
            width,
            height,
            commands,
            script,
            keep_going,
            format,
        } => run::cmd_run(
            config_path,
            &run::RunParams {
                width,
                height,
                commands: &commands,
                script: script.as_deref(),
                keep_going,
                format,
                quiet: cli.quiet,
            },
        ),
        Commands::Keys { format } => keys::cmd_keys(config_path, format),
        Commands::Check { file } => check::cmd_check(file.as_deref().or(config_path), cli.quiet),
        Commands::Completions { shell } => completions::cmd_completions(shell),
        Commands::Manpage => manpage::cmd_manpage(),
    }
}
