//! Shared utility functions used across command modules.

use std::path::Path;

use tessel_core::layout::PaneError;
use tessel_core::{CallbackFactory, LayoutSettings, PaneFactory, PaneId};

use crate::error::CliError;

/// Loads settings from `config_path`, or the defaults when none is given.
pub fn load_settings(config_path: Option<&Path>) -> Result<LayoutSettings, CliError> {
    let _span = tracing::debug_span!(tessel_core::tracing::span_names::CONFIG_LOAD).entered();
    match config_path {
        Some(path) => Ok(LayoutSettings::load(path)?),
        None => Ok(LayoutSettings::default()),
    }
}

/// Creates a pane factory whose panes are bare, numbered handles.
///
/// The harness has no editable surfaces to create, so the factory only
/// counts. Handles start at 1, matching the numbers shown in the output.
pub fn scratch_factory() -> impl PaneFactory {
    let mut next: u64 = 0;
    CallbackFactory::new(
        move || -> Result<PaneId, PaneError> {
            next += 1;
            Ok(PaneId::from_raw(next))
        },
        |pane: PaneId| tracing::trace!(%pane, "Released pane"),
    )
}
