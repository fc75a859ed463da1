//! Property-based tests for the window command layer
//!
//! Commands print as canonical command lines that parse back to the same
//! command, and arbitrary command streams run through an `EditorContext`
//! leave a consistent layout with an accurate status line.

use proptest::prelude::*;
use tessel_core::command::parse_script;
use tessel_core::testing::RecordingFactory;
use tessel_core::{
    Direction, EditorContext, LayoutSettings, ResizeDirection, SplitOrientation, WindowCommand,
};

// ============================================================================
// Test Strategies
// ============================================================================

fn tab_name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9 _.-]{0,12}[a-z0-9]"
}

/// Strategy for generating any window command
fn command_strategy() -> impl Strategy<Value = WindowCommand> {
    prop_oneof![
        prop_oneof![
            Just(SplitOrientation::Horizontal),
            Just(SplitOrientation::Vertical)
        ]
        .prop_map(WindowCommand::Split),
        Just(WindowCommand::Close),
        Just(WindowCommand::Only),
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Down),
            Just(Direction::Up),
            Just(Direction::Right),
        ]
        .prop_map(WindowCommand::Focus),
        any::<bool>().prop_map(|forward| WindowCommand::CycleFocus { forward }),
        prop_oneof![
            Just(ResizeDirection::Increase),
            Just(ResizeDirection::Decrease)
        ]
        .prop_map(WindowCommand::Resize),
        Just(WindowCommand::Equalize),
        Just(WindowCommand::TabNew),
        Just(WindowCommand::TabNext),
        Just(WindowCommand::TabPrev),
        (1usize..6).prop_map(WindowCommand::TabGoto),
        Just(WindowCommand::TabClose),
        tab_name_strategy().prop_map(WindowCommand::TabRename),
        (0u16..100, 0u16..40).prop_map(|(x, y)| WindowCommand::Click { x, y }),
        (1u16..200, 1u16..80)
            .prop_map(|(width, height)| WindowCommand::ResizeScreen { width, height }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Display output is a command line that parses to the same command,
    /// with or without the leading colon.
    #[test]
    fn prop_display_parses_back(command in command_strategy()) {
        let line = command.to_string();
        prop_assert_eq!(line.parse::<WindowCommand>(), Ok(command.clone()));
        prop_assert_eq!(format!(":{line}").parse::<WindowCommand>(), Ok(command));
    }

    /// A script of printed commands parses to the same commands, with
    /// comments and blank lines ignored.
    #[test]
    fn prop_script_round_trip(commands in proptest::collection::vec(command_strategy(), 0..20)) {
        let mut script = String::from("\" window script\n\n");
        for command in &commands {
            script.push_str(&command.to_string());
            script.push_str("\n# next\n");
        }
        prop_assert_eq!(parse_script(&script), Ok(commands));
    }

    /// The parser never panics, whatever it is given.
    #[test]
    fn prop_parse_never_panics(line in "\\PC{0,40}") {
        let _ = line.parse::<WindowCommand>();
    }

    /// Running arbitrary commands keeps the status line in step with the
    /// last result and never leaks panes.
    #[test]
    fn prop_context_status_tracks_last_result(
        commands in proptest::collection::vec(command_strategy(), 0..40),
    ) {
        let factory = RecordingFactory::new();
        let mut ctx = EditorContext::new(factory.clone(), 80, 24, LayoutSettings::default())
            .expect("context");

        for command in &commands {
            let result = ctx.execute(command);
            match &result {
                Ok(_) => prop_assert_eq!(ctx.status(), None),
                Err(err) => {
                    let message = err.to_string();
                    prop_assert_eq!(ctx.status(), Some(message.as_str()));
                }
            }
            prop_assert_eq!(ctx.layout().pane_count(), factory.live().len());
        }

        drop(ctx);
        prop_assert!(factory.live().is_empty());
    }
}
