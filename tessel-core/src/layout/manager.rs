//! Layout manager
//!
//! [`LayoutManager`] is the single entry point the editor uses to change the
//! window layout. It owns an ordered, never-empty list of [`TabPage`]s, the
//! index of the active tab, the current screen size and the
//! [`PaneFactory`] that mints and releases panes.
//!
//! Geometry is never cached: every operation that needs rectangles derives
//! them from the active tree and the stored screen size.
//!
//! # Example
//!
//! ```
//! use tessel_core::layout::{Direction, LayoutManager};
//! use tessel_core::testing::RecordingFactory;
//!
//! let mut layout = LayoutManager::new(RecordingFactory::new(), 80, 24).unwrap();
//! let left = layout.active_pane().unwrap();
//! let right = layout.vertical_split().unwrap();
//!
//! assert_eq!(layout.active_pane(), Some(right));
//! assert!(layout.navigate(Direction::Left).unwrap());
//! assert_eq!(layout.active_pane(), Some(left));
//! ```

use super::error::{LayoutError, LayoutResult};
use super::geometry::{collect_leaves, leaf_at};
use super::navigate::{cycle, find_neighbor};
use super::pane::PaneFactory;
use super::snapshot::LayoutSnapshot;
use super::tab::TabPage;
use super::types::{Direction, PaneId, Rect, ResizeDirection, SplitOrientation, TabId};

/// Ratio change applied by one resize step.
pub const DEFAULT_RESIZE_STEP: f64 = 0.1;

/// Name given to the tab created with the manager.
pub const DEFAULT_TAB_NAME: &str = "main";

/// Owns every tab and every pane of the editor's window layout.
///
/// Dropping the manager destroys all remaining panes through the factory.
#[derive(Debug)]
pub struct LayoutManager<F: PaneFactory> {
    factory: F,
    tabs: Vec<TabPage>,
    active_tab: usize,
    width: u16,
    height: u16,
    /// Tabs opened over the manager's lifetime, used for default names.
    tabs_opened: usize,
}

impl<F: PaneFactory> LayoutManager<F> {
    /// Creates a manager with one tab holding one fresh pane.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PaneCreation` if the factory cannot create the
    /// first pane.
    pub fn new(factory: F, width: u16, height: u16) -> LayoutResult<Self> {
        Self::with_tab_name(factory, width, height, DEFAULT_TAB_NAME)
    }

    /// Creates a manager whose first tab is called `name`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PaneCreation` if the factory cannot create the
    /// first pane.
    pub fn with_tab_name(
        mut factory: F,
        width: u16,
        height: u16,
        name: impl Into<String>,
    ) -> LayoutResult<Self> {
        let pane = create_pane(&mut factory)?;
        let tab = TabPage::new(pane, name);
        tracing::debug!(tab = %tab.id(), pane = %pane, width, height, "Created layout");

        Ok(Self {
            factory,
            tabs: vec![tab],
            active_tab: 0,
            width,
            height,
            tabs_opened: 1,
        })
    }

    fn current_tab(&self) -> LayoutResult<&TabPage> {
        let tab = self
            .tabs
            .get(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.assert_consistent();
        Ok(tab)
    }

    // ========================================================================
    // Windows
    // ========================================================================

    /// Splits the active pane top/bottom and focuses the new (bottom) pane.
    ///
    /// # Errors
    ///
    /// - `LayoutError::NoActiveTab` if the active tab index is stale
    /// - `LayoutError::PaneCreation` if the factory fails; nothing changes
    pub fn horizontal_split(&mut self) -> LayoutResult<PaneId> {
        self.split_active(SplitOrientation::Horizontal)
    }

    /// Splits the active pane left/right and focuses the new (right) pane.
    ///
    /// # Errors
    ///
    /// - `LayoutError::NoActiveTab` if the active tab index is stale
    /// - `LayoutError::PaneCreation` if the factory fails; nothing changes
    pub fn vertical_split(&mut self) -> LayoutResult<PaneId> {
        self.split_active(SplitOrientation::Vertical)
    }

    /// Splits the active pane with the given orientation.
    ///
    /// # Errors
    ///
    /// See [`LayoutManager::horizontal_split`].
    pub fn split_active(&mut self, orientation: SplitOrientation) -> LayoutResult<PaneId> {
        let tab = self
            .tabs
            .get_mut(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.assert_consistent();
        let target = tab.active();

        let new_pane = create_pane(&mut self.factory)?;
        if let Err(err) = tab
            .root_mut()
            .replace_leaf_with_split(target, new_pane, orientation)
        {
            self.factory.destroy_pane(new_pane);
            return Err(err);
        }
        tab.set_active(new_pane)?;

        tracing::debug!(tab = %tab.id(), pane = %new_pane, target = %target, ?orientation, "Split pane");
        Ok(new_pane)
    }

    /// Closes the active pane and focuses the first remaining pane.
    ///
    /// Returns the closed pane, which has already been destroyed.
    ///
    /// # Errors
    ///
    /// - `LayoutError::CannotCloseLastWindow` if the tab has one pane
    /// - `LayoutError::NoActiveTab` if the active tab index is stale
    pub fn close_active_window(&mut self) -> LayoutResult<PaneId> {
        let tab = self
            .tabs
            .get_mut(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.assert_consistent();
        if tab.pane_count() == 1 {
            return Err(LayoutError::CannotCloseLastWindow);
        }

        let target = tab.active();
        let factory = &mut self.factory;
        tab.root_mut()
            .remove_leaf_and_collapse(target, |pane| factory.destroy_pane(pane))?;
        let focus = tab.root().first_pane();
        tab.set_active(focus)?;

        tracing::debug!(tab = %tab.id(), pane = %target, focus = %focus, "Closed pane");
        Ok(target)
    }

    /// Destroys every pane of the active tab except the active one.
    ///
    /// Returns how many panes were destroyed.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NoActiveTab` if the active tab index is stale.
    pub fn close_other_windows(&mut self) -> LayoutResult<usize> {
        let tab = self
            .tabs
            .get_mut(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.assert_consistent();

        let keep = tab.active();
        let factory = &mut self.factory;
        let closed = tab
            .root_mut()
            .keep_only(keep, |pane| factory.destroy_pane(pane))?;

        tracing::debug!(tab = %tab.id(), pane = %keep, closed, "Closed other panes");
        Ok(closed)
    }

    /// Moves focus to the nearest pane in `direction`.
    ///
    /// Returns `false`, leaving focus alone, when there is no pane on that
    /// side.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NoActiveTab` if the active tab index is stale.
    pub fn navigate(&mut self, direction: Direction) -> LayoutResult<bool> {
        let area = self.area();
        let tab = self
            .tabs
            .get_mut(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.assert_consistent();

        let from = tab.active();
        let Some(to) = find_neighbor(tab.root(), area, from, direction) else {
            return Ok(false);
        };
        tab.set_active(to)?;

        tracing::debug!(from = %from, to = %to, %direction, "Moved focus");
        Ok(true)
    }

    /// Moves focus to the next (or previous) pane in traversal order,
    /// wrapping around. Returns the newly focused pane.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NoActiveTab` if the active tab index is stale.
    pub fn cycle_focus(&mut self, forward: bool) -> LayoutResult<PaneId> {
        let tab = self
            .tabs
            .get_mut(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.assert_consistent();

        let next = cycle(tab.root(), tab.active(), forward);
        tab.set_active(next)?;
        Ok(next)
    }

    /// Grows or shrinks the active pane by nudging every split between it
    /// and the root by `step`.
    ///
    /// # Errors
    ///
    /// - `LayoutError::InvalidResizeStep` if `step` is NaN, infinite or
    ///   negative; the tree is left as it was
    /// - `LayoutError::NoActiveTab` if the active tab index is stale
    pub fn resize_active_split(
        &mut self,
        direction: ResizeDirection,
        step: f64,
    ) -> LayoutResult<()> {
        let tab = self
            .tabs
            .get_mut(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.assert_consistent();

        let active = tab.active();
        let splits = tab.root_mut().resize_along_path(active, direction, step)?;

        tracing::debug!(pane = %active, ?direction, step, splits, "Resized splits");
        Ok(())
    }

    /// Resets every split of the active tab to an even ratio.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NoActiveTab` if the active tab index is stale.
    pub fn equalize_splits(&mut self) -> LayoutResult<()> {
        let tab = self
            .tabs
            .get_mut(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.assert_consistent();
        tab.root_mut().equalize();

        tracing::debug!(tab = %tab.id(), "Equalized splits");
        Ok(())
    }

    /// Focuses the pane under the cell `(x, y)` of the active tab.
    ///
    /// Returns the focused pane, or `None` if the point is off screen.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NoActiveTab` if the active tab index is stale.
    pub fn handle_pointer(&mut self, x: u16, y: u16) -> LayoutResult<Option<PaneId>> {
        let area = self.area();
        let tab = self
            .tabs
            .get_mut(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.assert_consistent();

        let Some(pane) = leaf_at(tab.root(), area, x, y) else {
            return Ok(None);
        };
        tab.set_active(pane)?;
        Ok(Some(pane))
    }

    // ========================================================================
    // Tabs
    // ========================================================================

    /// Opens a tab with one fresh pane and makes it active.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PaneCreation` if the factory fails; no tab is
    /// added.
    pub fn new_tab(&mut self) -> LayoutResult<TabId> {
        let pane = create_pane(&mut self.factory)?;
        self.tabs_opened += 1;
        let tab = TabPage::new(pane, format!("tab {}", self.tabs_opened));
        let id = tab.id();

        self.tabs.push(tab);
        self.active_tab = self.tabs.len() - 1;

        tracing::debug!(tab = %id, pane = %pane, index = self.active_tab, "Opened tab");
        Ok(id)
    }

    /// Activates the tab after the current one, wrapping to the first.
    pub fn next_tab(&mut self) {
        self.active_tab = (self.active_tab + 1) % self.tabs.len();
    }

    /// Activates the tab before the current one, wrapping to the last.
    pub fn prev_tab(&mut self) {
        let len = self.tabs.len();
        self.active_tab = (self.active_tab + len - 1) % len;
    }

    /// Activates the tab at `index` (zero-based).
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidTabIndex` if there is no such tab.
    pub fn switch_tab(&mut self, index: usize) -> LayoutResult<()> {
        if index >= self.tabs.len() {
            return Err(LayoutError::InvalidTabIndex {
                index,
                count: self.tabs.len(),
            });
        }
        self.active_tab = index;
        Ok(())
    }

    /// Closes the active tab, destroying all of its panes.
    ///
    /// The tab that slides into the closed one's position becomes active,
    /// or the last tab if the closed one was last.
    ///
    /// # Errors
    ///
    /// - `LayoutError::CannotCloseLastTab` if only one tab is open
    /// - `LayoutError::NoActiveTab` if the active tab index is stale
    pub fn close_tab(&mut self) -> LayoutResult<TabId> {
        if self.tabs.len() == 1 {
            return Err(LayoutError::CannotCloseLastTab);
        }
        if self.active_tab >= self.tabs.len() {
            return Err(LayoutError::NoActiveTab);
        }

        let tab = self.tabs.remove(self.active_tab);
        self.active_tab = self.active_tab.min(self.tabs.len() - 1);

        let id = tab.id();
        let factory = &mut self.factory;
        tab.destroy(|pane| factory.destroy_pane(pane));
        Ok(id)
    }

    /// Renames the active tab.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NoActiveTab` if the active tab index is stale.
    pub fn rename_active_tab(&mut self, name: impl Into<String>) -> LayoutResult<()> {
        let tab = self
            .tabs
            .get_mut(self.active_tab)
            .ok_or(LayoutError::NoActiveTab)?;
        tab.rename(name);
        Ok(())
    }

    // ========================================================================
    // Screen
    // ========================================================================

    /// Records a new screen size. Ratios are kept, so every rectangle
    /// scales with the screen.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Returns the full screen area.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::sized(self.width, self.height)
    }

    /// Calls `visit` with every pane of the active tab and the rectangle it
    /// owns inside `area`, in traversal order.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NoActiveTab` if the active tab index is stale.
    pub fn render(&self, area: Rect, mut visit: impl FnMut(PaneId, Rect)) -> LayoutResult<()> {
        let tab = self.current_tab()?;
        for (pane, rect) in collect_leaves(tab.root(), area) {
            visit(pane, rect);
        }
        Ok(())
    }

    /// Describes the active tab at the current screen size.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NoActiveTab` if the active tab index is stale.
    pub fn snapshot(&self) -> LayoutResult<LayoutSnapshot> {
        let tab = self.current_tab()?;
        Ok(LayoutSnapshot::capture(
            &self.tabs,
            self.active_tab,
            tab,
            self.area(),
        ))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the focused pane of the active tab.
    #[must_use]
    pub fn active_pane(&self) -> Option<PaneId> {
        self.active_tab().map(TabPage::active)
    }

    /// Returns the active tab.
    #[must_use]
    pub fn active_tab(&self) -> Option<&TabPage> {
        self.tabs.get(self.active_tab)
    }

    /// Returns the zero-based index of the active tab.
    #[must_use]
    pub const fn active_tab_index(&self) -> usize {
        self.active_tab
    }

    /// Returns the number of open tabs (always at least one).
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Returns every tab in display order.
    #[must_use]
    pub fn tabs(&self) -> &[TabPage] {
        &self.tabs
    }

    /// Returns the tab names in display order.
    #[must_use]
    pub fn tab_names(&self) -> Vec<&str> {
        self.tabs.iter().map(TabPage::name).collect()
    }

    /// Returns the number of panes across all tabs.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.tabs.iter().map(TabPage::pane_count).sum()
    }

    /// Returns the pane factory.
    #[must_use]
    pub const fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: PaneFactory> Drop for LayoutManager<F> {
    fn drop(&mut self) {
        let factory = &mut self.factory;
        for tab in self.tabs.drain(..) {
            tab.destroy(|pane| factory.destroy_pane(pane));
        }
    }
}

fn create_pane<F: PaneFactory>(factory: &mut F) -> LayoutResult<PaneId> {
    factory.create_pane().map_err(|err| {
        tracing::warn!(error = %err, "Pane factory failed");
        err.into()
    })
}
