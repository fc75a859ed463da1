//! Property-based tests for `LayoutManager`
//!
//! Random sequences of window and tab operations are applied to a manager
//! backed by a `RecordingFactory`. After every step the layout must still
//! be consistent: the active pane lives in its tab, the factory's live set
//! matches the panes held by the tabs, ratios stay in range and the leaves
//! tile the screen.

use proptest::prelude::*;
use tessel_core::layout::{MAX_SPLIT_RATIO, MIN_SPLIT_RATIO};
use tessel_core::testing::RecordingFactory;
use tessel_core::{
    Direction, LayoutError, LayoutManager, PaneError, PaneId, ResizeDirection, SplitOrientation,
};

// ============================================================================
// Test Strategies
// ============================================================================

fn orientation_strategy() -> impl Strategy<Value = SplitOrientation> {
    prop_oneof![
        Just(SplitOrientation::Horizontal),
        Just(SplitOrientation::Vertical),
    ]
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

fn resize_strategy() -> impl Strategy<Value = ResizeDirection> {
    prop_oneof![
        Just(ResizeDirection::Increase),
        Just(ResizeDirection::Decrease),
    ]
}

/// Represents an operation that can be performed on a `LayoutManager`
#[derive(Debug, Clone)]
enum LayoutOperation {
    Split(SplitOrientation),
    Close,
    Only,
    Navigate(Direction),
    Cycle(bool),
    Resize(ResizeDirection),
    Equalize,
    NewTab,
    NextTab,
    PrevTab,
    SwitchTab(usize),
    CloseTab,
    Click(u16, u16),
    ResizeScreen(u16, u16),
    FailNextCreate,
}

/// Strategy for generating layout operations, weighted towards splits so
/// trees actually grow
fn layout_operation_strategy() -> impl Strategy<Value = LayoutOperation> {
    prop_oneof![
        4 => orientation_strategy().prop_map(LayoutOperation::Split),
        2 => Just(LayoutOperation::Close),
        1 => Just(LayoutOperation::Only),
        3 => direction_strategy().prop_map(LayoutOperation::Navigate),
        1 => any::<bool>().prop_map(LayoutOperation::Cycle),
        2 => resize_strategy().prop_map(LayoutOperation::Resize),
        1 => Just(LayoutOperation::Equalize),
        1 => Just(LayoutOperation::NewTab),
        1 => Just(LayoutOperation::NextTab),
        1 => Just(LayoutOperation::PrevTab),
        1 => (0usize..5).prop_map(LayoutOperation::SwitchTab),
        1 => Just(LayoutOperation::CloseTab),
        1 => (0u16..100, 0u16..40).prop_map(|(x, y)| LayoutOperation::Click(x, y)),
        1 => (0u16..200, 0u16..80).prop_map(|(w, h)| LayoutOperation::ResizeScreen(w, h)),
        1 => Just(LayoutOperation::FailNextCreate),
    ]
}

fn layout_operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LayoutOperation>> {
    proptest::collection::vec(layout_operation_strategy(), 0..=max_ops)
}

fn new_layout() -> (LayoutManager<RecordingFactory>, RecordingFactory) {
    let factory = RecordingFactory::new();
    let layout = LayoutManager::new(factory.clone(), 80, 24).expect("first pane");
    (layout, factory)
}

/// Apply an operation to a layout, ignoring expected errors
fn apply_operation(
    layout: &mut LayoutManager<RecordingFactory>,
    factory: &RecordingFactory,
    op: &LayoutOperation,
) {
    match op {
        LayoutOperation::Split(orientation) => {
            let _ = layout.split_active(*orientation);
        }
        LayoutOperation::Close => {
            let _ = layout.close_active_window();
        }
        LayoutOperation::Only => {
            let _ = layout.close_other_windows();
        }
        LayoutOperation::Navigate(direction) => {
            let _ = layout.navigate(*direction);
        }
        LayoutOperation::Cycle(forward) => {
            let _ = layout.cycle_focus(*forward);
        }
        LayoutOperation::Resize(direction) => {
            let _ = layout.resize_active_split(*direction, 0.1);
        }
        LayoutOperation::Equalize => {
            let _ = layout.equalize_splits();
        }
        LayoutOperation::NewTab => {
            let _ = layout.new_tab();
        }
        LayoutOperation::NextTab => layout.next_tab(),
        LayoutOperation::PrevTab => layout.prev_tab(),
        LayoutOperation::SwitchTab(index) => {
            let _ = layout.switch_tab(*index);
        }
        LayoutOperation::CloseTab => {
            let _ = layout.close_tab();
        }
        LayoutOperation::Click(x, y) => {
            let _ = layout.handle_pointer(*x, *y);
        }
        LayoutOperation::ResizeScreen(width, height) => layout.resize(*width, *height),
        LayoutOperation::FailNextCreate => factory.fail_next(),
    }
}

/// Splits the active pane, retrying while armed factory failures remain.
fn split_until_created(
    layout: &mut LayoutManager<RecordingFactory>,
    orientation: SplitOrientation,
) -> Result<PaneId, TestCaseError> {
    loop {
        match layout.split_active(orientation) {
            Ok(pane) => return Ok(pane),
            Err(LayoutError::PaneCreation(_)) => {}
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        }
    }
}

/// Checks everything that must hold between operations
fn check_consistent(
    layout: &LayoutManager<RecordingFactory>,
    factory: &RecordingFactory,
) -> Result<(), TestCaseError> {
    prop_assert!(layout.tab_count() >= 1);
    prop_assert!(layout.active_tab_index() < layout.tab_count());

    let mut held: Vec<PaneId> = Vec::new();
    for tab in layout.tabs() {
        let panes = tab.panes();
        prop_assert!(
            panes.contains(&tab.active()),
            "active {} missing from {}",
            tab.active(),
            tab.name()
        );
        for ratio in tab.root().ratios() {
            prop_assert!((MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&ratio));
        }
        let area = layout.area();
        let covered: u32 = tab.leaves(area).iter().map(|(_, rect)| rect.area()).sum();
        prop_assert_eq!(covered, area.area());
        held.extend(panes);
    }
    held.sort();
    prop_assert_eq!(held, factory.live(), "tabs and factory disagree on live panes");
    Ok(())
}

// ============================================================================
// Property: random operation sequences keep the layout consistent
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_operations_keep_layout_consistent(ops in layout_operations_strategy(40)) {
        let (mut layout, factory) = new_layout();
        for op in &ops {
            apply_operation(&mut layout, &factory, op);
            check_consistent(&layout, &factory)?;
        }
    }

    /// Every created pane is destroyed exactly once by the time the manager
    /// is gone. `RecordingFactory` panics on a second destruction.
    #[test]
    fn prop_panes_destroyed_exactly_once(ops in layout_operations_strategy(40)) {
        let (mut layout, factory) = new_layout();
        for op in &ops {
            apply_operation(&mut layout, &factory, op);
        }
        drop(layout);

        prop_assert!(factory.live().is_empty());
        let mut created = factory.created();
        let mut destroyed = factory.destroyed();
        created.sort();
        destroyed.sort();
        prop_assert_eq!(created, destroyed);
    }

    /// A vertical split immediately closed again leaves the tree as it was.
    #[test]
    fn prop_split_then_close_restores_tree(
        ops in layout_operations_strategy(20),
        orientation in orientation_strategy(),
    ) {
        let (mut layout, factory) = new_layout();
        for op in &ops {
            apply_operation(&mut layout, &factory, op);
        }
        let before = layout.active_tab().expect("active tab").root().clone();
        let new_pane = split_until_created(&mut layout, orientation)?;
        prop_assert_eq!(layout.active_pane(), Some(new_pane));
        prop_assert_eq!(layout.close_active_window(), Ok(new_pane));

        let after = layout.active_tab().expect("active tab").root();
        prop_assert_eq!(after, &before);
        prop_assert!(!factory.live().contains(&new_pane));
    }

    /// `close_other_windows` leaves exactly the active pane.
    #[test]
    fn prop_close_others_leaves_one(ops in layout_operations_strategy(30)) {
        let (mut layout, factory) = new_layout();
        for op in &ops {
            apply_operation(&mut layout, &factory, op);
        }

        let active = layout.active_pane();
        let panes_before = layout.active_tab().expect("active tab").pane_count();
        let closed = layout.close_other_windows().expect("close others");

        let tab = layout.active_tab().expect("active tab");
        prop_assert_eq!(tab.pane_count(), 1);
        prop_assert_eq!(closed, panes_before - 1);
        prop_assert_eq!(layout.active_pane(), active);
        check_consistent(&layout, &factory)?;
    }

    /// Navigation either moves focus to a different pane or reports that it
    /// did nothing; it never "moves" to the active pane.
    #[test]
    fn prop_navigate_never_selects_active(
        ops in layout_operations_strategy(30),
        direction in direction_strategy(),
    ) {
        let (mut layout, factory) = new_layout();
        for op in &ops {
            apply_operation(&mut layout, &factory, op);
        }

        let before = layout.active_pane();
        let moved = layout.navigate(direction).expect("navigate");
        if moved {
            prop_assert_ne!(layout.active_pane(), before);
        } else {
            prop_assert_eq!(layout.active_pane(), before);
        }
    }

    /// After equalizing, every split of the active tab is even.
    #[test]
    fn prop_equalize_makes_every_ratio_half(ops in layout_operations_strategy(40)) {
        let (mut layout, factory) = new_layout();
        for op in &ops {
            apply_operation(&mut layout, &factory, op);
        }

        layout.equalize_splits().expect("equalize");
        let tab = layout.active_tab().expect("active tab");
        for ratio in tab.root().ratios() {
            prop_assert!((ratio - 0.5).abs() < f64::EPSILON);
        }
    }

    /// `new_tab` adds exactly one tab and activates it.
    #[test]
    fn prop_new_tab_appends_and_activates(ops in layout_operations_strategy(30)) {
        let (mut layout, factory) = new_layout();
        for op in &ops {
            apply_operation(&mut layout, &factory, op);
        }
        let _ = layout.split_active(SplitOrientation::Vertical);

        let count = layout.tab_count();
        // Each failed attempt consumes one armed failure.
        while let Err(err) = layout.new_tab() {
            prop_assert!(matches!(err, LayoutError::PaneCreation(_)));
        }
        prop_assert_eq!(layout.tab_count(), count + 1);
        prop_assert_eq!(layout.active_tab_index(), count);
        prop_assert_eq!(layout.active_tab().expect("active tab").pane_count(), 1);
    }

    /// Resizing never pushes a ratio out of range, however often it runs.
    #[test]
    fn prop_resize_stays_in_range(
        splits in proptest::collection::vec(orientation_strategy(), 1..6),
        resizes in proptest::collection::vec((resize_strategy(), 0.0f64..1.0), 1..30),
    ) {
        let (mut layout, _factory) = new_layout();
        for orientation in splits {
            layout.split_active(orientation).expect("split");
        }
        for (direction, step) in resizes {
            layout.resize_active_split(direction, step).expect("resize");
            for ratio in layout.active_tab().expect("active tab").root().ratios() {
                prop_assert!((MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&ratio));
            }
        }
    }
}

// ============================================================================
// Tab count rules
// ============================================================================

#[test]
fn close_tab_needs_a_second_tab() {
    let (mut layout, factory) = new_layout();
    assert_eq!(layout.close_tab(), Err(LayoutError::CannotCloseLastTab));

    layout.new_tab().expect("new tab");
    assert_eq!(layout.tab_count(), 2);
    layout.close_tab().expect("close tab");
    assert_eq!(layout.tab_count(), 1);
    assert_eq!(factory.live().len(), 1);
}

// ============================================================================
// Scenarios at 80x24
// ============================================================================

#[test]
fn scenario_vsplit_then_hsplit_then_close() {
    let (mut layout, _factory) = new_layout();
    assert_eq!(layout.tab_count(), 1);
    assert_eq!(layout.pane_count(), 1);

    let right = layout.vertical_split().expect("vsplit");
    let tab = layout.active_tab().expect("active tab");
    assert!((tab.root().ratio().expect("split") - 0.5).abs() < f64::EPSILON);
    let vsplit_tree = tab.root().clone();

    let bottom = layout.horizontal_split().expect("hsplit");
    let tab = layout.active_tab().expect("active tab");
    assert_eq!(tab.pane_count(), 3);
    assert_eq!(tab.root().split_count(), 2);
    assert_eq!(tab.panes()[1], right);
    assert_eq!(tab.panes()[2], bottom);

    assert_eq!(layout.close_active_window(), Ok(bottom));
    assert_eq!(layout.active_tab().expect("active tab").root(), &vsplit_tree);
}

#[test]
fn scenario_grow_right_pane_moves_divider_left() {
    let (mut layout, _factory) = new_layout();
    layout.vertical_split().expect("vsplit");

    layout
        .resize_active_split(ResizeDirection::Increase, 0.1)
        .expect("resize");

    let ratio = layout
        .active_tab()
        .expect("active tab")
        .root()
        .ratio()
        .expect("split");
    assert!((ratio - 0.4).abs() < 1e-9, "ratio was {ratio}");
}

#[test]
fn failed_split_leaves_tree_untouched() {
    let (mut layout, factory) = new_layout();
    layout.vertical_split().expect("vsplit");
    let before = layout.active_tab().expect("active tab").root().clone();
    let active = layout.active_pane();

    factory.fail_next();
    assert!(matches!(
        layout.horizontal_split(),
        Err(LayoutError::PaneCreation(PaneError::Backend(_)))
    ));
    assert_eq!(layout.active_tab().expect("active tab").root(), &before);
    assert_eq!(layout.active_pane(), active);
    assert_eq!(factory.live().len(), 2);
}
