//! Validate a settings file.

use std::path::Path;

use crate::error::CliError;
use crate::util::load_settings;

/// Check command handler
pub fn cmd_check(path: Option<&Path>, quiet: bool) -> Result<(), CliError> {
    let settings = load_settings(path)?;
    if !quiet {
        match path {
            Some(path) => println!("{}: ok", path.display()),
            None => println!("No settings file given; built-in defaults are valid"),
        }
        if settings.keybindings.has_overrides() {
            println!(
                "{} keybinding override(s)",
                settings.keybindings.overrides.len()
            );
        }
    }
    Ok(())
}
