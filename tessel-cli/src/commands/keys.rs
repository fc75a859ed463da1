//! List window keybindings.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use tessel_core::config::{
    KeybindingCategory, KeybindingSettings, default_keybindings, split_chords,
};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::format_json;
use crate::util::load_settings;

/// One effective binding, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingOutput {
    pub category: String,
    pub action: String,
    pub label: String,
    pub keys: Vec<String>,
    pub overridden: bool,
}

/// Keys command handler
pub fn cmd_keys(config_path: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let bindings = effective_bindings(&settings.keybindings);

    let output = match format {
        OutputFormat::Table | OutputFormat::Map => format_bindings(&bindings),
        OutputFormat::Json => format_json(&bindings)?,
    };
    println!("{output}");
    Ok(())
}

/// Resolves every default binding against the user's overrides, grouped
/// by category.
#[must_use]
pub fn effective_bindings(overrides: &KeybindingSettings) -> Vec<BindingOutput> {
    let defs = default_keybindings();
    KeybindingCategory::all()
        .iter()
        .flat_map(|category| defs.iter().filter(move |def| def.category == *category))
        .map(|def| BindingOutput {
            category: def.category.label().to_string(),
            action: def.action.clone(),
            label: def.label.clone(),
            keys: split_chords(overrides.get_keys(def))
                .into_iter()
                .map(str::to_string)
                .collect(),
            overridden: overrides.overrides.contains_key(&def.action),
        })
        .collect()
}

/// Format bindings as a table, one section per category
#[must_use]
pub fn format_bindings(bindings: &[BindingOutput]) -> String {
    let action_width = bindings
        .iter()
        .map(|b| b.action.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    let mut current = None;
    for binding in bindings {
        if current != Some(binding.category.as_str()) {
            if current.is_some() {
                output.push('\n');
            }
            let _ = writeln!(output, "{}:", binding.category);
            current = Some(binding.category.as_str());
        }
        let marker = if binding.overridden { " (custom)" } else { "" };
        let _ = writeln!(
            output,
            "  {:<action_width$}  {}{marker}",
            binding.action,
            binding.keys.join(" ")
        );
    }
    output.trim_end().to_string()
}
