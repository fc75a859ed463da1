//! Man page generation via `clap_mangen`.

use clap::CommandFactory;

use crate::cli::Cli;
use crate::error::CliError;

/// Generate the `tessel(1)` man page and write it to stdout.
pub fn cmd_manpage() -> Result<(), CliError> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut std::io::stdout())?;
    Ok(())
}
