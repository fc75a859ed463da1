//! Command dispatch context
//!
//! [`EditorContext`] bundles the state window commands act on. It is passed
//! explicitly to whatever handles input; there is no global editor.

use super::{CommandError, CommandResult, Keymap, WindowCommand};
use crate::config::LayoutSettings;
use crate::layout::{LayoutManager, PaneFactory};

/// What a successfully executed command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The layout, focus or active tab changed.
    Applied,
    /// The command was valid but had nothing to do (no neighbour in that
    /// direction, a click outside every pane, an unmapped key).
    Unchanged,
}

/// The layout plus everything needed to run window commands against it.
#[derive(Debug)]
pub struct EditorContext<F: PaneFactory> {
    layout: LayoutManager<F>,
    settings: LayoutSettings,
    keymap: Keymap,
    status: Option<String>,
}

impl<F: PaneFactory> EditorContext<F> {
    /// Creates the layout for a `width` by `height` screen.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Layout` if the first pane cannot be created.
    pub fn new(factory: F, width: u16, height: u16, settings: LayoutSettings) -> CommandResult<Self> {
        let layout =
            LayoutManager::with_tab_name(factory, width, height, settings.initial_tab_name.clone())?;
        let keymap = Keymap::new(&settings.keybindings);
        Ok(Self {
            layout,
            settings,
            keymap,
            status: None,
        })
    }

    /// Runs one command.
    ///
    /// A failure is also recorded as the status message, so the editor can
    /// show it on the command line; a success clears the status.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Layout` if the layout rejects the command.
    pub fn execute(&mut self, command: &WindowCommand) -> CommandResult<Outcome> {
        let _span = tracing::debug_span!(
            crate::tracing::span_names::COMMAND_EXECUTE,
            command = %command
        )
        .entered();

        let result = self.dispatch(command);
        self.record(&result);
        result
    }

    /// Parses and runs an ex-style command line.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Parse` for an invalid line, otherwise the
    /// errors of [`EditorContext::execute`].
    pub fn run_line(&mut self, line: &str) -> CommandResult<Outcome> {
        match line.parse::<WindowCommand>() {
            Ok(command) => self.execute(&command),
            Err(err) => {
                let result = Err(err);
                self.record(&result);
                result
            }
        }
    }

    /// Runs the command bound to a key chord.
    ///
    /// Unmapped chords are not an error: they return `Outcome::Unchanged`
    /// so the caller can offer the key to other handlers.
    ///
    /// # Errors
    ///
    /// See [`EditorContext::execute`].
    pub fn press(&mut self, chord: &str) -> CommandResult<Outcome> {
        match self.keymap.resolve(chord).cloned() {
            Some(command) => self.execute(&command),
            None => Ok(Outcome::Unchanged),
        }
    }

    fn record(&mut self, result: &CommandResult<Outcome>) {
        self.status = match result {
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = %err, "Window command failed");
                Some(err.to_string())
            }
        };
    }

    fn dispatch(&mut self, command: &WindowCommand) -> CommandResult<Outcome> {
        let layout = &mut self.layout;
        let outcome = match command {
            WindowCommand::Split(orientation) => {
                layout.split_active(*orientation)?;
                Outcome::Applied
            }
            WindowCommand::Close => {
                layout.close_active_window()?;
                Outcome::Applied
            }
            WindowCommand::Only => changed(layout.close_other_windows()? > 0),
            WindowCommand::Focus(direction) => changed(layout.navigate(*direction)?),
            WindowCommand::CycleFocus { forward } => {
                let before = layout.active_pane();
                changed(Some(layout.cycle_focus(*forward)?) != before)
            }
            WindowCommand::Resize(direction) => {
                layout.resize_active_split(*direction, self.settings.resize_step)?;
                Outcome::Applied
            }
            WindowCommand::Equalize => {
                layout.equalize_splits()?;
                Outcome::Applied
            }
            WindowCommand::TabNew => {
                layout.new_tab()?;
                Outcome::Applied
            }
            WindowCommand::TabNext => {
                layout.next_tab();
                changed(layout.tab_count() > 1)
            }
            WindowCommand::TabPrev => {
                layout.prev_tab();
                changed(layout.tab_count() > 1)
            }
            WindowCommand::TabGoto(number) => {
                let before = layout.active_tab_index();
                let index = number.checked_sub(1).ok_or_else(|| {
                    CommandError::Parse("tab numbers start at 1".to_string())
                })?;
                layout.switch_tab(index)?;
                changed(index != before)
            }
            WindowCommand::TabClose => {
                layout.close_tab()?;
                Outcome::Applied
            }
            WindowCommand::TabRename(name) => {
                layout.rename_active_tab(name.as_str())?;
                Outcome::Applied
            }
            WindowCommand::Click { x, y } => changed(layout.handle_pointer(*x, *y)?.is_some()),
            WindowCommand::ResizeScreen { width, height } => {
                let before = layout.area();
                layout.resize(*width, *height);
                changed(layout.area() != before)
            }
        };
        Ok(outcome)
    }

    /// Returns the layout.
    #[must_use]
    pub const fn layout(&self) -> &LayoutManager<F> {
        &self.layout
    }

    /// Returns the layout for direct manipulation.
    pub fn layout_mut(&mut self) -> &mut LayoutManager<F> {
        &mut self.layout
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Returns the keymap built from the settings.
    #[must_use]
    pub const fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Returns the message left by the last failed command, if the most
    /// recent command failed.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

const fn changed(applied: bool) -> Outcome {
    if applied {
        Outcome::Applied
    } else {
        Outcome::Unchanged
    }
}
