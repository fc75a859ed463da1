//! Tessel Core Library
//!
//! This crate provides the window layout engine of the Tessel terminal text
//! editor: a tiling split tree per tab, a tab multiplexer, screen geometry,
//! spatial focus navigation and the window command layer on top of them.
//!
//! # Crate Structure
//!
//! - [`layout`] - Split trees, tabs, geometry and the `LayoutManager`
//! - [`command`] - Window commands, ex-style parsing, keymap, `EditorContext`
//! - [`config`] - Layout settings and keybindings (TOML)
//! - [`tracing`] - Subscriber setup and standard span/field names
//! - [`testing`] - Pane factory fixtures for tests

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod command;
pub mod config;
pub mod layout;
pub mod testing;
pub mod tracing;

// =============================================================================
// Convenience re-exports
// =============================================================================

pub use command::{CommandError, CommandResult, EditorContext, Keymap, Outcome, WindowCommand};
pub use config::{ConfigError, KeybindingSettings, LayoutSettings};
pub use layout::{
    CallbackFactory, Direction, LayoutError, LayoutManager, LayoutResult, LayoutSnapshot,
    PaneError, PaneFactory, PaneId, Rect, ResizeDirection, SplitNode, SplitOrientation, TabId,
    TabPage,
};
pub use crate::tracing::{TracingConfig, TracingError, TracingLevel, TracingOutput, init_tracing};
