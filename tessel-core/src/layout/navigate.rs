//! Spatial navigation between panes
//!
//! Directional focus compares rectangle centers instead of walking tree
//! adjacency, so "move right" lands on whatever pane is visually closest on
//! the right even when it lives in a distant branch of the tree.

use super::geometry::collect_leaves;
use super::tree::SplitNode;
use super::types::{Direction, PaneId, Rect};

/// Finds the best spatial neighbor of `active` in `direction`.
///
/// Candidates are leaves whose center lies strictly on the requested side of
/// the active leaf's center. Among them the one with the smallest Manhattan
/// distance between centers wins; ties go to the leaf that comes first in
/// traversal order. The active pane itself is never returned.
///
/// Returns `None` when there is no candidate or `active` is not in the tree.
#[must_use]
pub fn find_neighbor(
    node: &SplitNode,
    area: Rect,
    active: PaneId,
    direction: Direction,
) -> Option<PaneId> {
    let leaves = collect_leaves(node, area);
    let (ax, ay) = leaves
        .iter()
        .find(|(pane, _)| *pane == active)
        .map(|(_, rect)| rect.center())?;

    let mut best: Option<(PaneId, f64)> = None;
    for (pane, rect) in &leaves {
        if *pane == active {
            continue;
        }

        let (cx, cy) = rect.center();
        let on_side = match direction {
            Direction::Left => cx < ax,
            Direction::Right => cx > ax,
            Direction::Up => cy < ay,
            Direction::Down => cy > ay,
        };
        if !on_side {
            continue;
        }

        let distance = (cx - ax).abs() + (cy - ay).abs();
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((*pane, distance)),
        }
    }

    best.map(|(pane, _)| pane)
}

/// Returns the pane after (or before) `active` in traversal order, wrapping
/// around at either end.
///
/// A tree with a single leaf, or an `active` pane that is not part of the
/// tree, yields the first pane.
#[must_use]
pub fn cycle(node: &SplitNode, active: PaneId, forward: bool) -> PaneId {
    let panes = node.panes();
    let Some(position) = panes.iter().position(|&pane| pane == active) else {
        return node.first_pane();
    };

    let len = panes.len();
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    panes[next]
}
