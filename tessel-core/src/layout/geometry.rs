//! Screen geometry for split trees
//!
//! Pure functions mapping a tree and a bounding rectangle to per-leaf
//! rectangles. Nothing here is cached: ratios are relative, so geometry is
//! re-derived from the current area whenever it is needed.
//!
//! A vertical split gives its left child `floor(width * ratio)` columns and
//! its right child the rest; a horizontal split does the same with rows.
//! Child rectangles therefore tile the parent exactly, with no gaps and no
//! overlap, for every valid ratio and every area (including empty ones).

use serde::Serialize;

use super::tree::SplitNode;
use super::types::{PaneId, Rect, SplitOrientation};

/// A boundary between the two children of a split, for border drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Divider {
    /// Orientation of the split that owns the boundary.
    pub orientation: SplitOrientation,
    /// First column (vertical) or row (horizontal) of the second child.
    pub position: u16,
    /// Row (vertical) or column (horizontal) where the boundary starts.
    pub start: u16,
    /// Length of the boundary in cells.
    pub length: u16,
}

/// Splits `area` between two children.
#[must_use]
pub fn split_area(area: Rect, orientation: SplitOrientation, ratio: f64) -> (Rect, Rect) {
    match orientation {
        SplitOrientation::Vertical => {
            let first = scaled(area.width, ratio);
            (
                Rect::new(area.x, area.y, first, area.height),
                Rect::new(
                    area.x.saturating_add(first),
                    area.y,
                    area.width - first,
                    area.height,
                ),
            )
        }
        SplitOrientation::Horizontal => {
            let first = scaled(area.height, ratio);
            (
                Rect::new(area.x, area.y, area.width, first),
                Rect::new(
                    area.x,
                    area.y.saturating_add(first),
                    area.width,
                    area.height - first,
                ),
            )
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(length: u16, ratio: f64) -> u16 {
    // ratio <= 1.0 keeps the product within u16
    (f64::from(length) * ratio).floor().clamp(0.0, f64::from(length)) as u16
}

/// Returns both children of a split together with their rectangles.
fn child_areas(node: &SplitNode, area: Rect) -> Option<[(&SplitNode, Rect); 2]> {
    let (first, second, ratio) = node.halves()?;
    let orientation = node.orientation()?;
    let (first_area, second_area) = split_area(area, orientation, ratio);
    Some([(first, first_area), (second, second_area)])
}

/// Returns every leaf with its rectangle, in pre-order.
///
/// Left children come before right ones and top children before bottom
/// ones. Rendering, navigation and focus fallbacks all rely on this order.
#[must_use]
pub fn collect_leaves(node: &SplitNode, area: Rect) -> Vec<(PaneId, Rect)> {
    let mut leaves = Vec::with_capacity(node.leaf_count());
    collect_into(node, area, &mut leaves);
    leaves
}

fn collect_into(node: &SplitNode, area: Rect, out: &mut Vec<(PaneId, Rect)>) {
    match child_areas(node, area) {
        None => out.extend(node.as_leaf().map(|pane| (pane, area))),
        Some(children) => {
            for (child, child_area) in children {
                collect_into(child, child_area, out);
            }
        }
    }
}

/// Returns the rectangle owned by `pane`, if it is part of the tree.
#[must_use]
pub fn rect_of(node: &SplitNode, area: Rect, pane: PaneId) -> Option<Rect> {
    match child_areas(node, area) {
        None => (node.as_leaf() == Some(pane)).then_some(area),
        Some(children) => children
            .into_iter()
            .find(|(child, _)| child.contains_pane(pane))
            .and_then(|(child, child_area)| rect_of(child, child_area, pane)),
    }
}

/// Returns the leaf whose rectangle contains the cell `(x, y)`.
///
/// Returns `None` if the point lies outside `area`.
#[must_use]
pub fn leaf_at(node: &SplitNode, area: Rect, x: u16, y: u16) -> Option<PaneId> {
    if !area.contains(x, y) {
        return None;
    }

    let mut node = node;
    let mut area = area;
    while let Some([(first, first_area), (second, second_area)]) = child_areas(node, area) {
        if first_area.contains(x, y) {
            node = first;
            area = first_area;
        } else {
            node = second;
            area = second_area;
        }
    }
    node.as_leaf()
}

/// Returns the boundary of every split, in pre-order.
#[must_use]
pub fn dividers(node: &SplitNode, area: Rect) -> Vec<Divider> {
    let mut out = Vec::with_capacity(node.split_count());
    dividers_into(node, area, &mut out);
    out
}

fn dividers_into(node: &SplitNode, area: Rect, out: &mut Vec<Divider>) {
    let (Some(children), Some(orientation)) = (child_areas(node, area), node.orientation()) else {
        return;
    };
    let [(first, first_area), (second, second_area)] = children;

    out.push(match orientation {
        SplitOrientation::Vertical => Divider {
            orientation,
            position: second_area.x,
            start: area.y,
            length: area.height,
        },
        SplitOrientation::Horizontal => Divider {
            orientation,
            position: second_area.y,
            start: area.x,
            length: area.width,
        },
    });

    dividers_into(first, first_area, out);
    dividers_into(second, second_area, out);
}
