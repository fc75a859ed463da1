//! Key chord resolution

use std::collections::HashMap;

use super::WindowCommand;
use crate::config::{KeybindingSettings, default_keybindings, split_chords};

/// Maps key chords such as `<C-w>v` to window commands.
///
/// Built from the default keybinding registry with the user's overrides
/// applied. An overridden action loses all of its default chords.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<String, WindowCommand>,
}

impl Keymap {
    /// Builds the keymap for the given overrides.
    #[must_use]
    pub fn new(settings: &KeybindingSettings) -> Self {
        let mut bindings = HashMap::new();
        for def in default_keybindings() {
            let Some(command) = WindowCommand::from_action(&def.action) else {
                continue;
            };
            for chord in split_chords(settings.get_keys(&def)) {
                if let Some(previous) = bindings.insert(chord.to_string(), command.clone()) {
                    tracing::warn!(
                        chord,
                        action = %def.action,
                        replaced = %previous,
                        "Key chord bound twice"
                    );
                }
            }
        }
        Self { bindings }
    }

    /// Returns the command bound to `chord`.
    #[must_use]
    pub fn resolve(&self, chord: &str) -> Option<&WindowCommand> {
        let _span =
            tracing::trace_span!(crate::tracing::span_names::KEYMAP_RESOLVE, chord).entered();
        self.bindings.get(chord.trim())
    }

    /// Returns every chord bound to `command`, sorted.
    #[must_use]
    pub fn chords_for(&self, command: &WindowCommand) -> Vec<&str> {
        let mut chords: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, bound)| *bound == command)
            .map(|(chord, _)| chord.as_str())
            .collect();
        chords.sort_unstable();
        chords
    }

    /// Returns the number of bound chords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no chord is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
