//! Tab pages
//!
//! A [`TabPage`] owns one split tree and remembers which of its panes has
//! focus. Tabs are fully independent: each has its own tree, its own active
//! pane and its own ratios.

use super::error::{LayoutError, LayoutResult};
use super::geometry::collect_leaves;
use super::tree::SplitNode;
use super::types::{PaneId, Rect, TabId};

/// One tab: a split tree plus its active pane.
///
/// The active pane always resolves to a leaf of the tree. Operations that
/// restructure the tree keep it that way; a tab found in any other state is
/// a bug and panics.
#[derive(Debug)]
pub struct TabPage {
    id: TabId,
    name: String,
    root: SplitNode,
    active: PaneId,
}

impl TabPage {
    /// Creates a tab holding a single pane.
    #[must_use]
    pub fn new(initial_pane: PaneId, name: impl Into<String>) -> Self {
        Self {
            id: TabId::new(),
            name: name.into(),
            root: SplitNode::leaf(initial_pane),
            active: initial_pane,
        }
    }

    /// Returns the tab's stable identifier.
    #[must_use]
    pub const fn id(&self) -> TabId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the root of the split tree.
    #[must_use]
    pub const fn root(&self) -> &SplitNode {
        &self.root
    }

    /// Returns the root of the split tree for structural edits.
    ///
    /// Callers must leave the active pane in the tree (or move focus with
    /// [`TabPage::set_active`]) before the next query.
    pub(crate) fn root_mut(&mut self) -> &mut SplitNode {
        &mut self.root
    }

    /// Returns the focused pane.
    #[must_use]
    pub const fn active(&self) -> PaneId {
        self.active
    }

    /// Moves focus to `pane`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PaneNotFound` if the pane is not in this tab.
    pub fn set_active(&mut self, pane: PaneId) -> LayoutResult<()> {
        if self.root.contains_pane(pane) {
            self.active = pane;
            Ok(())
        } else {
            Err(LayoutError::PaneNotFound(pane))
        }
    }

    /// Returns the number of panes in the tab.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Returns every pane in traversal order.
    #[must_use]
    pub fn panes(&self) -> Vec<PaneId> {
        self.root.panes()
    }

    /// Returns every pane with its rectangle inside `area`.
    #[must_use]
    pub fn leaves(&self, area: Rect) -> Vec<(PaneId, Rect)> {
        collect_leaves(&self.root, area)
    }

    /// Panics unless the active pane is a leaf of the tree.
    ///
    /// # Panics
    ///
    /// Panics if the tab's invariant has been broken.
    pub fn assert_consistent(&self) {
        assert!(
            self.root.contains_pane(self.active),
            "active {} is missing from tab {:?} ({})",
            self.active,
            self.name,
            self.id
        );
    }

    /// Consumes the tab, handing every pane to `destroy_pane`.
    pub fn destroy(self, destroy_pane: impl FnMut(PaneId)) {
        tracing::debug!(tab = %self.id, name = %self.name, panes = self.pane_count(), "Destroying tab");
        self.root.destroy(destroy_pane);
    }
}
