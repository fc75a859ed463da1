//! Configuration for Tessel's window layout
//!
//! Settings are stored as TOML. This module provides [`LayoutSettings`]
//! and the default window keybinding registry.

pub mod keybindings;
pub mod settings;

pub use keybindings::{
    KeybindingCategory, KeybindingDef, KeybindingSettings, default_keybindings, is_valid_chord,
    split_chords,
};
pub use settings::{ConfigError, ConfigResult, LayoutSettings, MAX_RESIZE_STEP};
