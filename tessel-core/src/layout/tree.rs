//! Split tree structure for window layouts
//!
//! A tab's windows are arranged in a strictly binary tree. Each node is
//! either a leaf holding one pane handle or a split holding exactly two
//! children and the fraction of space given to the first one.
//!
//! # Tree Structure
//!
//! ```text
//! VSplit(0.5)
//! ├── Leaf(A)
//! └── HSplit(0.5)
//!     ├── Leaf(B)
//!     └── Leaf(C)
//! ```
//!
//! Children are boxed and exclusively owned, so the tree is finite and
//! acyclic by construction. Structural edits only ever touch one level:
//! splitting turns a leaf into a split, closing promotes the sibling of the
//! removed leaf into its parent's place.

use super::error::{LayoutError, LayoutResult};
use super::types::{PaneId, ResizeDirection, SplitOrientation};

/// Ratio given to a freshly created split.
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// Smallest ratio a split may hold.
pub const MIN_SPLIT_RATIO: f64 = 0.1;

/// Largest ratio a split may hold.
pub const MAX_SPLIT_RATIO: f64 = 0.9;

/// A node in the split tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitNode {
    /// A single pane.
    Leaf(PaneId),
    /// Side-by-side children divided by a vertical line.
    VSplit {
        /// Left child.
        left: Box<SplitNode>,
        /// Right child.
        right: Box<SplitNode>,
        /// Fraction of the width given to `left`.
        ratio: f64,
    },
    /// Stacked children divided by a horizontal line.
    HSplit {
        /// Top child.
        top: Box<SplitNode>,
        /// Bottom child.
        bottom: Box<SplitNode>,
        /// Fraction of the height given to `top`.
        ratio: f64,
    },
}

/// Outcome of a collapse step, reported up the recursion.
///
/// A split that directly holds the removed leaf cannot replace itself, so it
/// hands its surviving child to whoever owns it.
#[derive(Debug)]
enum Collapse {
    /// The target is not below this node.
    Unchanged,
    /// Replace this node with the contained subtree.
    Promoted(SplitNode),
    /// The target was removed further down; nothing left to do.
    Applied,
}

/// Clamps a ratio into the valid `[MIN_SPLIT_RATIO, MAX_SPLIT_RATIO]` range.
#[must_use]
pub fn clamp_ratio(ratio: f64) -> f64 {
    ratio.clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO)
}

impl SplitNode {
    /// Creates a leaf node.
    #[must_use]
    pub const fn leaf(pane: PaneId) -> Self {
        Self::Leaf(pane)
    }

    /// Creates a split with the default ratio.
    ///
    /// `first` becomes the left child of a vertical split or the top child
    /// of a horizontal one.
    #[must_use]
    pub fn split(orientation: SplitOrientation, first: Self, second: Self) -> Self {
        Self::with_ratio(orientation, first, second, DEFAULT_SPLIT_RATIO)
    }

    /// Creates a split with a custom ratio.
    ///
    /// # Panics
    ///
    /// Panics if `ratio` is outside `[MIN_SPLIT_RATIO, MAX_SPLIT_RATIO]`.
    #[must_use]
    pub fn with_ratio(orientation: SplitOrientation, first: Self, second: Self, ratio: f64) -> Self {
        assert!(
            (MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&ratio),
            "Split ratio must be between {MIN_SPLIT_RATIO} and {MAX_SPLIT_RATIO}"
        );
        match orientation {
            SplitOrientation::Vertical => Self::VSplit {
                left: Box::new(first),
                right: Box::new(second),
                ratio,
            },
            SplitOrientation::Horizontal => Self::HSplit {
                top: Box::new(first),
                bottom: Box::new(second),
                ratio,
            },
        }
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns true if this is a split node.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        !self.is_leaf()
    }

    /// Returns the pane if this is a leaf node.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<PaneId> {
        match self {
            Self::Leaf(pane) => Some(*pane),
            _ => None,
        }
    }

    /// Returns the split orientation if this is a split node.
    #[must_use]
    pub const fn orientation(&self) -> Option<SplitOrientation> {
        match self {
            Self::Leaf(_) => None,
            Self::VSplit { .. } => Some(SplitOrientation::Vertical),
            Self::HSplit { .. } => Some(SplitOrientation::Horizontal),
        }
    }

    /// Returns the ratio if this is a split node.
    #[must_use]
    pub const fn ratio(&self) -> Option<f64> {
        match self {
            Self::Leaf(_) => None,
            Self::VSplit { ratio, .. } | Self::HSplit { ratio, .. } => Some(*ratio),
        }
    }

    /// Returns `(first, second, ratio)` for a split node.
    #[must_use]
    pub fn halves(&self) -> Option<(&Self, &Self, f64)> {
        match self {
            Self::Leaf(_) => None,
            Self::VSplit { left, right, ratio } => Some((&**left, &**right, *ratio)),
            Self::HSplit { top, bottom, ratio } => Some((&**top, &**bottom, *ratio)),
        }
    }

    fn halves_mut(&mut self) -> Option<(&mut Self, &mut Self, &mut f64)> {
        match self {
            Self::Leaf(_) => None,
            Self::VSplit { left, right, ratio } => Some((&mut **left, &mut **right, ratio)),
            Self::HSplit { top, bottom, ratio } => Some((&mut **top, &mut **bottom, ratio)),
        }
    }

    // ========================================================================
    // Tree Traversal Methods
    // ========================================================================

    /// Returns true if the tree contains a leaf holding `pane`.
    #[must_use]
    pub fn contains_pane(&self, pane: PaneId) -> bool {
        match self.halves() {
            None => self.as_leaf() == Some(pane),
            Some((first, second, _)) => first.contains_pane(pane) || second.contains_pane(pane),
        }
    }

    /// Returns all panes in pre-order (left before right, top before bottom).
    #[must_use]
    pub fn panes(&self) -> Vec<PaneId> {
        let mut panes = Vec::new();
        self.collect_panes(&mut panes);
        panes
    }

    fn collect_panes(&self, panes: &mut Vec<PaneId>) {
        match self.halves() {
            None => panes.extend(self.as_leaf()),
            Some((first, second, _)) => {
                first.collect_panes(panes);
                second.collect_panes(panes);
            }
        }
    }

    /// Returns the number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.halves()
            .map_or(1, |(first, second, _)| first.leaf_count() + second.leaf_count())
    }

    /// Returns the number of split nodes. Always `leaf_count() - 1`.
    #[must_use]
    pub fn split_count(&self) -> usize {
        self.halves()
            .map_or(0, |(first, second, _)| 1 + first.split_count() + second.split_count())
    }

    /// Returns the depth of the tree. A single leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.halves()
            .map_or(0, |(first, second, _)| 1 + first.depth().max(second.depth()))
    }

    /// Returns the first pane in traversal order (leftmost/topmost).
    #[must_use]
    pub fn first_pane(&self) -> PaneId {
        match self {
            Self::Leaf(pane) => *pane,
            Self::VSplit { left: first, .. } | Self::HSplit { top: first, .. } => {
                first.first_pane()
            }
        }
    }

    /// Returns every split ratio in pre-order.
    #[must_use]
    pub fn ratios(&self) -> Vec<f64> {
        let mut ratios = Vec::new();
        self.collect_ratios(&mut ratios);
        ratios
    }

    fn collect_ratios(&self, ratios: &mut Vec<f64>) {
        if let Some((first, second, ratio)) = self.halves() {
            ratios.push(ratio);
            first.collect_ratios(ratios);
            second.collect_ratios(ratios);
        }
    }

    // ========================================================================
    // Tree Mutation Methods
    // ========================================================================

    /// Replaces the leaf holding `target` with a split of the original pane
    /// and `new_pane`.
    ///
    /// The original pane becomes the left (vertical) or top (horizontal)
    /// child; the new split gets the default ratio.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PaneNotFound` if no leaf holds `target`.
    pub fn replace_leaf_with_split(
        &mut self,
        target: PaneId,
        new_pane: PaneId,
        orientation: SplitOrientation,
    ) -> LayoutResult<()> {
        debug_assert!(
            !self.contains_pane(new_pane),
            "{new_pane} is already part of the tree"
        );
        if self.split_leaf(target, new_pane, orientation) {
            Ok(())
        } else {
            Err(LayoutError::PaneNotFound(target))
        }
    }

    fn split_leaf(
        &mut self,
        target: PaneId,
        new_pane: PaneId,
        orientation: SplitOrientation,
    ) -> bool {
        if let Self::Leaf(pane) = *self {
            if pane != target {
                return false;
            }
            *self = Self::split(orientation, Self::Leaf(pane), Self::Leaf(new_pane));
            return true;
        }

        let Some((first, second, _)) = self.halves_mut() else {
            return false;
        };
        first.split_leaf(target, new_pane, orientation)
            || second.split_leaf(target, new_pane, orientation)
    }

    /// Removes the leaf holding `target` and promotes its sibling into the
    /// parent split's place.
    ///
    /// `destroy` is called with the removed pane once the tree has been
    /// restructured. Returns the removed pane.
    ///
    /// # Errors
    ///
    /// - `LayoutError::CannotRemoveRoot` if `target` is the only leaf
    /// - `LayoutError::PaneNotFound` if no leaf holds `target`
    pub fn remove_leaf_and_collapse(
        &mut self,
        target: PaneId,
        destroy: impl FnOnce(PaneId),
    ) -> LayoutResult<PaneId> {
        if let Self::Leaf(pane) = self {
            return Err(if *pane == target {
                LayoutError::CannotRemoveRoot
            } else {
                LayoutError::PaneNotFound(target)
            });
        }

        match self.collapse(target) {
            Collapse::Unchanged => return Err(LayoutError::PaneNotFound(target)),
            Collapse::Promoted(subtree) => *self = subtree,
            Collapse::Applied => {}
        }

        destroy(target);
        Ok(target)
    }

    fn collapse(&mut self, target: PaneId) -> Collapse {
        let Some((first, second, _)) = self.halves_mut() else {
            return Collapse::Unchanged;
        };

        // The removed leaf's slot is left holding a stand-in leaf; the whole
        // split is dropped by whoever applies the promotion.
        if first.as_leaf() == Some(target) {
            return Collapse::Promoted(std::mem::replace(second, Self::Leaf(target)));
        }
        if second.as_leaf() == Some(target) {
            return Collapse::Promoted(std::mem::replace(first, Self::Leaf(target)));
        }

        for child in [first, second] {
            match child.collapse(target) {
                Collapse::Unchanged => {}
                Collapse::Promoted(subtree) => {
                    *child = subtree;
                    return Collapse::Applied;
                }
                Collapse::Applied => return Collapse::Applied,
            }
        }

        Collapse::Unchanged
    }

    /// Collapses the tree to a single leaf holding `keep`, destroying every
    /// other pane in traversal order. Returns how many panes were destroyed.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PaneNotFound` if no leaf holds `keep`; the tree
    /// is left untouched.
    pub fn keep_only(
        &mut self,
        keep: PaneId,
        mut destroy: impl FnMut(PaneId),
    ) -> LayoutResult<usize> {
        if !self.contains_pane(keep) {
            return Err(LayoutError::PaneNotFound(keep));
        }

        let removed = std::mem::replace(self, Self::Leaf(keep)).panes();
        let mut count = 0;
        for pane in removed.into_iter().filter(|&pane| pane != keep) {
            destroy(pane);
            count += 1;
        }
        Ok(count)
    }

    /// Consumes the tree, destroying every pane in traversal order.
    pub fn destroy(self, mut destroy_pane: impl FnMut(PaneId)) {
        for pane in self.panes() {
            destroy_pane(pane);
        }
    }

    /// Sets every split ratio to the default.
    pub fn equalize(&mut self) {
        if let Some((first, second, ratio)) = self.halves_mut() {
            *ratio = DEFAULT_SPLIT_RATIO;
            first.equalize();
            second.equalize();
        }
    }

    /// Nudges every split on the path from the root to `target`.
    ///
    /// For [`ResizeDirection::Increase`], a split holding `target` in its
    /// first child gains `delta` and a split holding it in its second child
    /// loses `delta`; `Decrease` inverts both. Each ratio is clamped on its
    /// own. Returns the number of splits visited.
    ///
    /// # Errors
    ///
    /// - `LayoutError::InvalidResizeStep` if `delta` is not a finite,
    ///   non-negative number; no ratio is touched
    /// - `LayoutError::PaneNotFound` if no leaf holds `target`
    pub fn resize_along_path(
        &mut self,
        target: PaneId,
        direction: ResizeDirection,
        delta: f64,
    ) -> LayoutResult<usize> {
        if !(delta.is_finite() && delta >= 0.0) {
            return Err(LayoutError::InvalidResizeStep);
        }
        if !self.contains_pane(target) {
            return Err(LayoutError::PaneNotFound(target));
        }
        Ok(self.nudge(target, direction.sign() * delta))
    }

    fn nudge(&mut self, target: PaneId, signed_delta: f64) -> usize {
        let Some((first, second, ratio)) = self.halves_mut() else {
            return 0;
        };

        if first.contains_pane(target) {
            *ratio = clamp_ratio(*ratio + signed_delta);
            1 + first.nudge(target, signed_delta)
        } else {
            *ratio = clamp_ratio(*ratio - signed_delta);
            1 + second.nudge(target, signed_delta)
        }
    }
}
