//! Window commands
//!
//! Everything the user can do to the window layout is a [`WindowCommand`].
//! Commands come from ex-style command lines (`:vsplit`, `:wincmd h`,
//! `:tabnext 2`) or from key chords resolved through a [`Keymap`], and are
//! run against an explicit [`EditorContext`].

mod context;
mod keymap;
mod parse;

use std::fmt;

use thiserror::Error;

use crate::layout::{Direction, LayoutError, ResizeDirection, SplitOrientation};

pub use context::{EditorContext, Outcome};
pub use keymap::Keymap;
pub use parse::parse_script;

/// Errors that can occur while parsing or running a window command
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command line could not be understood
    #[error("{0}")]
    Parse(String),

    /// The layout rejected the command
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// A single window-management command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCommand {
    /// Split the active window
    Split(SplitOrientation),
    /// Close the active window
    Close,
    /// Close every other window of the tab
    Only,
    /// Move focus to the neighbouring window
    Focus(Direction),
    /// Move focus to the next or previous window in order
    CycleFocus {
        /// `true` for next, `false` for previous
        forward: bool,
    },
    /// Grow or shrink the active window
    Resize(ResizeDirection),
    /// Make all windows of the tab the same size
    Equalize,
    /// Open a new tab
    TabNew,
    /// Go to the next tab
    TabNext,
    /// Go to the previous tab
    TabPrev,
    /// Go to tab `n`, counting from 1
    TabGoto(usize),
    /// Close the active tab
    TabClose,
    /// Rename the active tab
    TabRename(String),
    /// Focus the window under a screen cell
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Record a new screen size
    ResizeScreen {
        /// Columns
        width: u16,
        /// Rows
        height: u16,
    },
}

impl WindowCommand {
    /// Returns the command bound to a keybinding action name.
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        let command = match action {
            "window.split-horizontal" => Self::Split(SplitOrientation::Horizontal),
            "window.split-vertical" => Self::Split(SplitOrientation::Vertical),
            "window.close" => Self::Close,
            "window.only" => Self::Only,
            "window.focus-left" => Self::Focus(Direction::Left),
            "window.focus-down" => Self::Focus(Direction::Down),
            "window.focus-up" => Self::Focus(Direction::Up),
            "window.focus-right" => Self::Focus(Direction::Right),
            "window.focus-next" => Self::CycleFocus { forward: true },
            "window.focus-prev" => Self::CycleFocus { forward: false },
            "window.grow" => Self::Resize(ResizeDirection::Increase),
            "window.shrink" => Self::Resize(ResizeDirection::Decrease),
            "window.equalize" => Self::Equalize,
            "tab.new" => Self::TabNew,
            "tab.next" => Self::TabNext,
            "tab.prev" => Self::TabPrev,
            "tab.close" => Self::TabClose,
            _ => return None,
        };
        Some(command)
    }
}

/// Formats the command as a canonical command line that parses back to the
/// same command.
impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Split(SplitOrientation::Horizontal) => write!(f, "split"),
            Self::Split(SplitOrientation::Vertical) => write!(f, "vsplit"),
            Self::Close => write!(f, "close"),
            Self::Only => write!(f, "only"),
            Self::Focus(direction) => {
                let key = match direction {
                    Direction::Left => 'h',
                    Direction::Down => 'j',
                    Direction::Up => 'k',
                    Direction::Right => 'l',
                };
                write!(f, "wincmd {key}")
            }
            Self::CycleFocus { forward: true } => write!(f, "wincmd w"),
            Self::CycleFocus { forward: false } => write!(f, "wincmd W"),
            Self::Resize(ResizeDirection::Increase) => write!(f, "wincmd +"),
            Self::Resize(ResizeDirection::Decrease) => write!(f, "wincmd -"),
            Self::Equalize => write!(f, "wincmd ="),
            Self::TabNew => write!(f, "tabnew"),
            Self::TabNext => write!(f, "tabnext"),
            Self::TabPrev => write!(f, "tabprevious"),
            Self::TabGoto(n) => write!(f, "tabnext {n}"),
            Self::TabClose => write!(f, "tabclose"),
            Self::TabRename(name) => write!(f, "tabrename {name}"),
            Self::Click { x, y } => write!(f, "click {x} {y}"),
            Self::ResizeScreen { width, height } => write!(f, "screen {width} {height}"),
        }
    }
}
