//! Window keybinding configuration
//!
//! Provides [`KeybindingSettings`] for user overrides of window-management
//! key chords and [`KeybindingDef`] for the default keybinding registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Custom keybinding overrides stored in user settings.
///
/// Each entry maps a window action name (e.g. `"window.split-vertical"`) to
/// one or more key chords separated by `|` (e.g. `"<C-w>v|<C-w><C-v>"`).
/// Actions not present in `overrides` use their built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingSettings {
    /// Action name → chord mapping.
    ///
    /// Only overridden bindings are stored; defaults are implicit.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub overrides: HashMap<String, String>,
}

/// A single keybinding definition with its default chords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingDef {
    /// Action name (e.g. `"window.close"`)
    pub action: String,
    /// Default chord(s), pipe-separated for multiple (e.g. `"<C-w>c|<C-w>q"`)
    pub default_keys: String,
    /// Human-readable label for help output
    pub label: String,
    /// Category for grouping in help output
    pub category: KeybindingCategory,
}

/// Categories for organizing keybindings in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingCategory {
    /// Creating and closing windows
    Windows,
    /// Moving focus between windows
    Focus,
    /// Changing split ratios
    Resize,
    /// Tab pages
    Tabs,
}

impl KeybindingCategory {
    /// Returns the display label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Focus => "Focus",
            Self::Resize => "Resize",
            Self::Tabs => "Tabs",
        }
    }

    /// Returns all categories in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Windows, Self::Focus, Self::Resize, Self::Tabs]
    }
}

impl KeybindingDef {
    /// Creates a new keybinding definition.
    #[must_use]
    pub fn new(
        action: impl Into<String>,
        default_keys: impl Into<String>,
        label: impl Into<String>,
        category: KeybindingCategory,
    ) -> Self {
        Self {
            action: action.into(),
            default_keys: default_keys.into(),
            label: label.into(),
            category,
        }
    }

    /// Splits the default chords into a list.
    #[must_use]
    pub fn default_key_list(&self) -> Vec<&str> {
        split_chords(&self.default_keys)
    }
}

impl KeybindingSettings {
    /// Returns the chord(s) for an action, falling back to the default.
    #[must_use]
    pub fn get_keys<'a>(&'a self, def: &'a KeybindingDef) -> &'a str {
        self.overrides
            .get(&def.action)
            .map_or(&def.default_keys, String::as_str)
    }

    /// Returns `true` if the user has overridden any keybindings.
    #[must_use]
    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }

    /// Returns override entries that name an unknown action or carry an
    /// invalid chord, as human-readable problems.
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let defs = default_keybindings();
        let mut problems: Vec<String> = self
            .overrides
            .iter()
            .flat_map(|(action, keys)| {
                let mut found = Vec::new();
                if !defs.iter().any(|def| def.action == *action) {
                    found.push(format!("unknown action '{action}'"));
                }
                for chord in split_chords(keys) {
                    if !is_valid_chord(chord) {
                        found.push(format!("invalid key chord '{chord}' for '{action}'"));
                    }
                }
                found
            })
            .collect();
        problems.sort();
        problems
    }
}

/// Splits a pipe-separated chord list, dropping blank entries.
#[must_use]
pub fn split_chords(keys: &str) -> Vec<&str> {
    keys.split('|')
        .map(str::trim)
        .filter(|chord| !chord.is_empty())
        .collect()
}

/// Returns the complete list of default keybinding definitions.
///
/// This is the single source of truth for window shortcuts. The order
/// matches the display order of `tessel keys`.
#[must_use]
pub fn default_keybindings() -> Vec<KeybindingDef> {
    use KeybindingCategory::{Focus, Resize, Tabs, Windows};
    vec![
        // Windows
        KeybindingDef::new(
            "window.split-horizontal",
            "<C-w>s|<C-w>S|<C-w><C-s>",
            "Split Horizontally",
            Windows,
        ),
        KeybindingDef::new(
            "window.split-vertical",
            "<C-w>v|<C-w><C-v>",
            "Split Vertically",
            Windows,
        ),
        KeybindingDef::new("window.close", "<C-w>c|<C-w>q", "Close Window", Windows),
        KeybindingDef::new(
            "window.only",
            "<C-w>o|<C-w><C-o>",
            "Close Other Windows",
            Windows,
        ),
        // Focus
        KeybindingDef::new("window.focus-left", "<C-w>h|<C-w><Left>", "Focus Left", Focus),
        KeybindingDef::new("window.focus-down", "<C-w>j|<C-w><Down>", "Focus Down", Focus),
        KeybindingDef::new("window.focus-up", "<C-w>k|<C-w><Up>", "Focus Up", Focus),
        KeybindingDef::new(
            "window.focus-right",
            "<C-w>l|<C-w><Right>",
            "Focus Right",
            Focus,
        ),
        KeybindingDef::new(
            "window.focus-next",
            "<C-w>w|<C-w><C-w>",
            "Focus Next Window",
            Focus,
        ),
        KeybindingDef::new("window.focus-prev", "<C-w>W", "Focus Previous Window", Focus),
        // Resize
        KeybindingDef::new("window.grow", "<C-w>+|<C-w>>", "Grow Window", Resize),
        KeybindingDef::new("window.shrink", "<C-w>-|<C-w><lt>", "Shrink Window", Resize),
        KeybindingDef::new("window.equalize", "<C-w>=", "Equalize Windows", Resize),
        // Tabs
        KeybindingDef::new("tab.new", "<C-w>t", "New Tab", Tabs),
        KeybindingDef::new("tab.next", "gt|<C-PageDown>", "Next Tab", Tabs),
        KeybindingDef::new("tab.prev", "gT|<C-PageUp>", "Previous Tab", Tabs),
        KeybindingDef::new("tab.close", "<C-w>x", "Close Tab", Tabs),
    ]
}

/// Validates a key chord string.
///
/// A chord is a sequence of plain characters and bracketed key names such
/// as `<C-w>` or `<Left>`. Brackets must be balanced and non-empty.
#[must_use]
pub fn is_valid_chord(chord: &str) -> bool {
    let chord = chord.trim();
    if chord.is_empty() {
        return false;
    }

    let mut rest = chord;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            return false;
        };
        let name = &rest[open + 1..open + close];
        if name.is_empty() || name.contains('<') || name.ends_with('-') {
            return false;
        }
        rest = &rest[open + close + 1..];
    }
    true
}
