//! Test fixtures for code built on the layout engine.
//!
//! [`RecordingFactory`] is a [`PaneFactory`] that hands out sequential pane
//! handles and keeps a ledger of what it created and destroyed. Clones share
//! the ledger, so a test can give one clone to a `LayoutManager` and keep
//! inspecting the other after the manager has been dropped.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::layout::{PaneError, PaneFactory, PaneId};

#[derive(Debug, Default)]
struct Ledger {
    next: u64,
    created: Vec<PaneId>,
    destroyed: Vec<PaneId>,
    live: BTreeSet<PaneId>,
    pending_failures: usize,
    limit: Option<usize>,
}

/// A pane factory that records every creation and destruction.
///
/// Destroying a pane that is not live (never created, or already destroyed)
/// panics, which turns double frees into test failures.
#[derive(Debug, Clone, Default)]
pub struct RecordingFactory {
    ledger: Rc<RefCell<Ledger>>,
}

impl RecordingFactory {
    /// Creates a factory with no limit on live panes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory that refuses to hold more than `limit` live panes.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        let factory = Self::default();
        factory.ledger.borrow_mut().limit = Some(limit);
        factory
    }

    /// Makes the next `create_pane` call fail with a backend error.
    pub fn fail_next(&self) {
        self.ledger.borrow_mut().pending_failures += 1;
    }

    /// Returns every pane created so far, in creation order.
    #[must_use]
    pub fn created(&self) -> Vec<PaneId> {
        self.ledger.borrow().created.clone()
    }

    /// Returns every pane destroyed so far, in destruction order.
    #[must_use]
    pub fn destroyed(&self) -> Vec<PaneId> {
        self.ledger.borrow().destroyed.clone()
    }

    /// Returns the panes created and not yet destroyed, sorted.
    #[must_use]
    pub fn live(&self) -> Vec<PaneId> {
        self.ledger.borrow().live.iter().copied().collect()
    }
}

impl PaneFactory for RecordingFactory {
    fn create_pane(&mut self) -> Result<PaneId, PaneError> {
        let mut ledger = self.ledger.borrow_mut();
        if ledger.pending_failures > 0 {
            ledger.pending_failures -= 1;
            return Err(PaneError::Backend("injected failure".to_string()));
        }
        if let Some(limit) = ledger.limit.filter(|&limit| ledger.live.len() >= limit) {
            return Err(PaneError::Exhausted(limit));
        }

        ledger.next += 1;
        let pane = PaneId::from_raw(ledger.next);
        ledger.created.push(pane);
        ledger.live.insert(pane);
        Ok(pane)
    }

    fn destroy_pane(&mut self, pane: PaneId) {
        let mut ledger = self.ledger.borrow_mut();
        assert!(ledger.live.remove(&pane), "{pane} destroyed while not live");
        ledger.destroyed.push(pane);
    }
}
