//! Serializable description of the visible layout
//!
//! A snapshot is a read-only picture of the active tab at a given screen
//! size, used for diagnostics and by the command-line harness. It is not a
//! persistence format: nothing reads it back.

use serde::Serialize;

use super::geometry::{Divider, collect_leaves, dividers};
use super::tab::TabPage;
use super::types::{PaneId, Rect};

/// One pane of a [`LayoutSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaneSnapshot {
    /// The pane handle.
    pub pane: PaneId,
    /// Cells owned by the pane.
    pub rect: Rect,
    /// Whether the pane has focus.
    pub active: bool,
}

/// The active tab's geometry at one screen size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    /// Display name of the active tab.
    pub tab: String,
    /// Index of the active tab.
    pub tab_index: usize,
    /// Names of all tabs, in order.
    pub tabs: Vec<String>,
    /// Screen area the geometry was computed for.
    pub area: Rect,
    /// Depth of the active tab's split tree.
    pub depth: usize,
    /// Panes in traversal order.
    pub panes: Vec<PaneSnapshot>,
    /// Split boundaries in traversal order.
    pub dividers: Vec<Divider>,
}

impl LayoutSnapshot {
    pub(crate) fn capture(tabs: &[TabPage], tab_index: usize, tab: &TabPage, area: Rect) -> Self {
        let active = tab.active();
        Self {
            tab: tab.name().to_owned(),
            tab_index,
            tabs: tabs.iter().map(|t| t.name().to_owned()).collect(),
            area,
            depth: tab.root().depth(),
            panes: collect_leaves(tab.root(), area)
                .into_iter()
                .map(|(pane, rect)| PaneSnapshot {
                    pane,
                    rect,
                    active: pane == active,
                })
                .collect(),
            dividers: dividers(tab.root(), area),
        }
    }

    /// Returns the focused pane's entry.
    #[must_use]
    pub fn active_pane(&self) -> Option<&PaneSnapshot> {
        self.panes.iter().find(|p| p.active)
    }
}
