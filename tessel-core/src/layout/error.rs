//! Error types for layout operations
//!
//! Every variant here is an expected, recoverable condition whose message is
//! meant to be shown to the user verbatim. Broken internal invariants are
//! not represented; they panic.

use thiserror::Error;

use super::types::PaneId;

/// Errors that can occur during layout operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The pane is not part of the tree being searched.
    #[error("pane not found: {0}")]
    PaneNotFound(PaneId),

    /// The active tab holds a single window.
    #[error("cannot close last window")]
    CannotCloseLastWindow,

    /// Only one tab is open.
    #[error("cannot close last tab")]
    CannotCloseLastTab,

    /// The pane is the only leaf of its tree and has no sibling to promote.
    #[error("cannot remove the root pane")]
    CannotRemoveRoot,

    /// A tab index outside `0..count`.
    #[error("invalid tab index: {index} (have {count} tabs)")]
    InvalidTabIndex {
        /// Requested index.
        index: usize,
        /// Number of open tabs.
        count: usize,
    },

    /// A resize step that is NaN, infinite or negative.
    #[error("resize step must be a finite, non-negative number")]
    InvalidResizeStep,

    /// The active tab index does not resolve to a tab.
    #[error("no active tab")]
    NoActiveTab,

    /// The pane factory could not create a pane.
    #[error(transparent)]
    PaneCreation(#[from] PaneError),
}

/// Errors reported by a [`PaneFactory`](super::PaneFactory).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaneError {
    /// The factory has no capacity left for new panes.
    #[error("pane limit reached ({0})")]
    Exhausted(usize),

    /// The backing surface could not be created.
    #[error("failed to create pane: {0}")]
    Backend(String),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
