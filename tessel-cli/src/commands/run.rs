//! Run window commands against a fresh layout.

use std::path::Path;

use tessel_core::command::parse_script;
use tessel_core::{EditorContext, PaneFactory, WindowCommand};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{format_json, format_map, format_table};
use crate::util::{load_settings, scratch_factory};

/// Parameters for the run command
pub struct RunParams<'a> {
    pub width: u16,
    pub height: u16,
    pub commands: &'a [String],
    pub script: Option<&'a Path>,
    pub keep_going: bool,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Run command handler
pub fn cmd_run(config_path: Option<&Path>, params: &RunParams<'_>) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let mut ctx = EditorContext::new(scratch_factory(), params.width, params.height, settings)
        .map_err(CliError::Script)?;

    let mut queue: Vec<(String, WindowCommand)> = Vec::new();
    if let Some(path) = params.script {
        let text = std::fs::read_to_string(path)?;
        let parsed = parse_script(&text).map_err(CliError::Script)?;
        queue.extend(parsed.into_iter().map(|cmd| (cmd.to_string(), cmd)));
    }
    for line in params.commands {
        let cmd = line.parse::<WindowCommand>().map_err(|source| CliError::Command {
            command: line.clone(),
            source,
        })?;
        queue.push((line.clone(), cmd));
    }

    let mut first_failure = None;
    for (text, cmd) in &queue {
        if let Err(source) = ctx.execute(cmd) {
            // Without keep-going the error reaches main, which prints it once.
            if params.keep_going && !params.quiet {
                eprintln!("{text}: {}", ctx.status().unwrap_or_default());
            }
            let err = CliError::Command {
                command: text.clone(),
                source,
            };
            if !params.keep_going {
                return Err(err);
            }
            if first_failure.is_none() {
                first_failure = Some(err);
            }
        }
    }

    print_layout(&ctx, params.format)?;

    first_failure.map_or(Ok(()), Err)
}

fn print_layout<F: PaneFactory>(
    ctx: &EditorContext<F>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let snapshot = ctx
        .layout()
        .snapshot()
        .map_err(|e| CliError::Script(e.into()))?;
    let output = match format {
        OutputFormat::Table => format_table(&snapshot),
        OutputFormat::Map => format_map(&snapshot)?,
        OutputFormat::Json => format_json(&snapshot)?,
    };
    println!("{output}");
    Ok(())
}
