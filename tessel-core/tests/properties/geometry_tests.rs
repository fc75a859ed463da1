//! Property-based tests for the geometry allocator
//!
//! Random split trees with random ratios are laid out over random screen
//! sizes; the leaf rectangles must tile the screen exactly and hit-testing
//! must agree with them.

use proptest::prelude::*;
use tessel_core::layout::{
    MAX_SPLIT_RATIO, MIN_SPLIT_RATIO, collect_leaves, dividers, leaf_at, rect_of,
};
use tessel_core::{PaneId, Rect, SplitNode, SplitOrientation};

// ============================================================================
// Test Strategies
// ============================================================================

/// Tree shape without pane handles; handles are assigned in pre-order.
#[derive(Debug, Clone)]
enum Shape {
    Leaf,
    Split(SplitOrientation, f64, Box<Shape>, Box<Shape>),
}

fn orientation_strategy() -> impl Strategy<Value = SplitOrientation> {
    prop_oneof![
        Just(SplitOrientation::Horizontal),
        Just(SplitOrientation::Vertical),
    ]
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    Just(Shape::Leaf).prop_recursive(6, 32, 2, |inner| {
        (
            orientation_strategy(),
            MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO,
            inner.clone(),
            inner,
        )
            .prop_map(|(orientation, ratio, first, second)| {
                Shape::Split(orientation, ratio, Box::new(first), Box::new(second))
            })
    })
}

fn build(shape: &Shape, next: &mut u64) -> SplitNode {
    match shape {
        Shape::Leaf => {
            *next += 1;
            SplitNode::leaf(PaneId::from_raw(*next))
        }
        Shape::Split(orientation, ratio, first, second) => {
            let first = build(first, next);
            let second = build(second, next);
            SplitNode::with_ratio(*orientation, first, second, *ratio)
        }
    }
}

fn tree_strategy() -> impl Strategy<Value = SplitNode> {
    shape_strategy().prop_map(|shape| build(&shape, &mut 0))
}

fn area_strategy() -> impl Strategy<Value = Rect> {
    (0u16..20, 0u16..10, 0u16..90, 0u16..40)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

// ============================================================================
// Property: leaf rectangles tile the area
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every cell of the area belongs to exactly one leaf and no leaf
    /// reaches outside it.
    #[test]
    fn prop_leaves_tile_area(tree in tree_strategy(), area in area_strategy()) {
        let leaves = collect_leaves(&tree, area);
        prop_assert_eq!(leaves.len(), tree.leaf_count());

        let total: u32 = leaves.iter().map(|(_, rect)| rect.area()).sum();
        prop_assert_eq!(total, area.area());

        for (pane, rect) in &leaves {
            prop_assert!(rect.is_empty() || (rect.x >= area.x && rect.right() <= area.right()),
                "{} leaves the area horizontally: {}", pane, rect);
            prop_assert!(rect.is_empty() || (rect.y >= area.y && rect.bottom() <= area.bottom()),
                "{} leaves the area vertically: {}", pane, rect);
        }

        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                let owners = leaves.iter().filter(|(_, rect)| rect.contains(x, y)).count();
                prop_assert_eq!(owners, 1, "cell ({}, {}) has {} owners", x, y, owners);
            }
        }
    }

    /// Leaves come out in the same order as the tree's pane list.
    #[test]
    fn prop_leaf_order_is_traversal_order(tree in tree_strategy(), area in area_strategy()) {
        let order: Vec<PaneId> = collect_leaves(&tree, area).into_iter().map(|(pane, _)| pane).collect();
        prop_assert_eq!(order, tree.panes());
    }

    /// `rect_of` agrees with `collect_leaves` for every pane.
    #[test]
    fn prop_rect_of_matches_collect(tree in tree_strategy(), area in area_strategy()) {
        for (pane, rect) in collect_leaves(&tree, area) {
            prop_assert_eq!(rect_of(&tree, area, pane), Some(rect));
        }
        prop_assert_eq!(rect_of(&tree, area, PaneId::from_raw(u64::MAX)), None);
    }

    /// Hit-testing returns the leaf whose rectangle holds the point, and
    /// nothing outside the area.
    #[test]
    fn prop_leaf_at_agrees_with_rects(
        tree in tree_strategy(),
        area in area_strategy(),
        x in 0u16..160,
        y in 0u16..80,
    ) {
        let leaves = collect_leaves(&tree, area);
        let expected = leaves
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(pane, _)| *pane);
        prop_assert_eq!(leaf_at(&tree, area, x, y), expected);
        if !area.contains(x, y) {
            prop_assert_eq!(expected, None);
        }
    }

    /// Every split contributes one divider.
    #[test]
    fn prop_one_divider_per_split(tree in tree_strategy(), area in area_strategy()) {
        prop_assert_eq!(dividers(&tree, area).len(), tree.split_count());
        prop_assert_eq!(tree.leaf_count(), tree.split_count() + 1);
    }
}

// ============================================================================
// Scenario: 80x24 vertical split
// ============================================================================

#[test]
fn vertical_split_of_80_by_24() {
    let tree = SplitNode::split(
        SplitOrientation::Vertical,
        SplitNode::leaf(PaneId::from_raw(1)),
        SplitNode::leaf(PaneId::from_raw(2)),
    );
    let leaves = collect_leaves(&tree, Rect::sized(80, 24));
    assert_eq!(
        leaves,
        vec![
            (PaneId::from_raw(1), Rect::new(0, 0, 40, 24)),
            (PaneId::from_raw(2), Rect::new(40, 0, 40, 24)),
        ]
    );
}
