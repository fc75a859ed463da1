//! Output formatting for layout snapshots.

use std::fmt::Write as _;

use serde::Serialize;
use tessel_core::LayoutSnapshot;

use crate::error::CliError;

/// Characters used to label panes on the screen map, in traversal order.
const MAP_LABELS: &[u8] = b"123456789abcdefghijklmnopqrstuvwxyz";

/// Largest screen, in cells, the map format will draw.
pub const MAX_MAP_CELLS: usize = 1 << 20;

/// Format a snapshot as a table of panes
#[must_use]
pub fn format_table(snapshot: &LayoutSnapshot) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Tab {}/{}: {}",
        snapshot.tab_index + 1,
        snapshot.tabs.len(),
        snapshot.tab
    );
    let _ = writeln!(
        output,
        "Screen: {}x{}  Depth: {}",
        snapshot.area.width, snapshot.area.height, snapshot.depth
    );
    output.push('\n');

    let _ = writeln!(
        output,
        "{:<4}  {:<6}  {:>5}  {:>5}  {:>5}  {:>6}",
        "", "PANE", "X", "Y", "WIDTH", "HEIGHT"
    );
    let _ = writeln!(
        output,
        "{:-<4}  {:-<6}  {:->5}  {:->5}  {:->5}  {:->6}",
        "", "", "", "", "", ""
    );

    for (index, pane) in snapshot.panes.iter().enumerate() {
        let marker = if pane.active { "*" } else { "" };
        let _ = writeln!(
            output,
            "{:<4}  {:<6}  {:>5}  {:>5}  {:>5}  {:>6}",
            format!("{}{marker}", label(index)),
            pane.pane.raw(),
            pane.rect.x,
            pane.rect.y,
            pane.rect.width,
            pane.rect.height
        );
    }

    output.trim_end().to_string()
}

/// Format a snapshot as a table followed by a character map of the screen.
///
/// Every cell shows the label of the pane that owns it; the focused pane's
/// origin cell is drawn as `*`. Cells no pane owns stay as `.`.
///
/// # Errors
///
/// Returns `CliError::Output` if the screen holds more than
/// [`MAX_MAP_CELLS`] cells.
pub fn format_map(snapshot: &LayoutSnapshot) -> Result<String, CliError> {
    let width = usize::from(snapshot.area.width);
    let height = usize::from(snapshot.area.height);
    if width * height > MAX_MAP_CELLS {
        return Err(CliError::Output(format!(
            "screen {width}x{height} is too large for map output (limit {MAX_MAP_CELLS} cells)"
        )));
    }
    let mut grid = vec![vec!['.'; width]; height];

    for (index, pane) in snapshot.panes.iter().enumerate() {
        let rect = pane.rect;
        let cell = label(index);
        for row in grid
            .iter_mut()
            .skip(usize::from(rect.y))
            .take(usize::from(rect.height))
        {
            for slot in row
                .iter_mut()
                .skip(usize::from(rect.x))
                .take(usize::from(rect.width))
            {
                *slot = cell;
            }
        }
        if pane.active && !rect.is_empty() {
            grid[usize::from(rect.y)][usize::from(rect.x)] = '*';
        }
    }

    let mut output = format_table(snapshot);
    output.push_str("\n\n");
    for row in grid {
        output.extend(row);
        output.push('\n');
    }
    Ok(output.trim_end().to_string())
}

/// Format any serializable value as pretty JSON
///
/// # Errors
///
/// Returns `CliError::Output` if JSON serialization fails.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))
}

fn label(index: usize) -> char {
    char::from(MAP_LABELS[index % MAP_LABELS.len()])
}
