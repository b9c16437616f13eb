//! # Navigation History
//!
//! Location keys shared by the running shell and its navigation links.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use defi_shell::{
    Location, LocationHistory, LocationKey, PendingTransition, ReadinessGate, Result,
};

/// Shared [`LocationHistory`] of the running shell.
///
/// The router does not re-render when a link to the current route is
/// clicked, so [`NavHistory::renavigate`] also bumps a signal the shell
/// subscribes to through [`NavHistory::observe`].
#[derive(Clone)]
pub struct NavHistory {
    history: Rc<RefCell<LocationHistory>>,
    renavigations: Signal<u64>,
}

impl NavHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Rc::new(RefCell::new(LocationHistory::new())),
            renavigations: Signal::new(0),
        }
    }

    /// Classifies the pass about to render at `path`.
    ///
    /// # Errors
    ///
    /// Returns the gate's error for a malformed path under a strict policy.
    pub fn observe<F>(
        &self,
        gate: &ReadinessGate<F>,
        path: &str,
    ) -> Result<(LocationKey, PendingTransition)> {
        let _ = self.renavigations.read();
        classify_pass(&mut self.history.borrow_mut(), gate, path)
    }

    /// Records an explicit navigation to `path`, the current route included.
    pub fn renavigate(&mut self, path: &str) {
        match self.history.borrow_mut().renavigate(path) {
            Ok(location) => tracing::debug!(path, key = %location.key(), "renavigated"),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring navigation to malformed path");
                return;
            }
        }
        self.renavigations += 1;
    }
}

impl Default for NavHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Assigns a key to `path` and reads the gate's depth memory for it.
///
/// Nothing is written to the gate; the caller commits the returned pending
/// transition once the pass has rendered. A malformed path keeps the key of
/// the last valid location.
pub(crate) fn classify_pass<F>(
    history: &mut LocationHistory,
    gate: &ReadinessGate<F>,
    path: &str,
) -> Result<(LocationKey, PendingTransition)> {
    match history.observe(path) {
        Ok(location) => Ok((location.key(), gate.begin(&location))),
        Err(err) => {
            let key = history
                .current()
                .map_or(LocationKey::new(0), Location::key);
            gate.recover(err).map(|pending| (key, pending))
        }
    }
}
