//! Window layout engine
//!
//! Tiles the editor's screen into panes using a binary split tree per tab.
//! Each tab owns its own tree and its own focused pane; the
//! [`LayoutManager`] owns the tabs and is the only thing the rest of the
//! editor talks to.
//!
//! # Architecture
//!
//! - **Opaque panes**: the engine stores [`PaneId`] handles minted by a
//!   [`PaneFactory`] and never looks at pane content
//! - **Binary tree**: every split has exactly two children and a ratio in
//!   `[0.1, 0.9]`; closing a pane promotes its sibling into the parent's place
//! - **Derived geometry**: rectangles are recomputed from ratios and the
//!   screen size on demand, never cached
//! - **Spatial focus**: directional navigation compares pane centers
//!
//! # Module Structure
//!
//! - `types` - Core value types (`PaneId`, `TabId`, `Rect`, directions)
//! - `tree` - Split tree structure and its mutations (`SplitNode`)
//! - `geometry` - Rectangles, hit-testing and dividers
//! - `navigate` - Directional and cyclic focus movement
//! - `tab` - Tab pages (`TabPage`)
//! - `manager` - The façade (`LayoutManager`)
//! - `pane` - Pane lifecycle seam (`PaneFactory`, `CallbackFactory`)
//! - `snapshot` - Serializable diagnostics (`LayoutSnapshot`)
//! - `error` - Error types (`LayoutError`, `PaneError`)
//!
//! # Example
//!
//! ```
//! use tessel_core::layout::{LayoutManager, Rect};
//! use tessel_core::testing::RecordingFactory;
//!
//! let mut layout = LayoutManager::new(RecordingFactory::new(), 80, 24).unwrap();
//! let first = layout.active_pane().unwrap();
//! let second = layout.vertical_split().unwrap();
//!
//! let mut rects = Vec::new();
//! layout
//!     .render(layout.area(), |pane, rect| rects.push((pane, rect)))
//!     .unwrap();
//! assert_eq!(
//!     rects,
//!     vec![
//!         (first, Rect::new(0, 0, 40, 24)),
//!         (second, Rect::new(40, 0, 40, 24)),
//!     ]
//! );
//!
//! // Closing the new pane collapses the tree back to one leaf.
//! layout.close_active_window().unwrap();
//! assert_eq!(layout.active_pane(), Some(first));
//! ```

mod error;
mod geometry;
mod manager;
mod navigate;
mod pane;
mod snapshot;
mod tab;
mod tree;
mod types;

pub use error::{LayoutError, LayoutResult, PaneError};
pub use geometry::{Divider, collect_leaves, dividers, leaf_at, rect_of, split_area};
pub use manager::{DEFAULT_RESIZE_STEP, DEFAULT_TAB_NAME, LayoutManager};
pub use navigate::{cycle, find_neighbor};
pub use pane::{CallbackFactory, PaneFactory};
pub use snapshot::{LayoutSnapshot, PaneSnapshot};
pub use tab::TabPage;
pub use tree::{DEFAULT_SPLIT_RATIO, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO, SplitNode, clamp_ratio};
pub use types::{Direction, PaneId, Rect, ResizeDirection, SplitOrientation, TabId};
