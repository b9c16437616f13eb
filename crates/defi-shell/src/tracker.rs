//! Previous depth memory.
//!
//! A shell instance remembers the depth of the location it rendered last.
//! Each render pass reads that memory to classify the incoming location and
//! writes it only once the pass has been committed. Writing first would make
//! every navigation compare a location against itself and fade.

use crate::location::Location;
use crate::transition::{classify, TransitionDecision};

/// Depth memory owned by one shell instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTracker {
    previous_depth: usize,
}

/// A classified render pass that has not been committed yet.
///
/// Obtained from [`TransitionTracker::begin`] and handed back to
/// [`TransitionTracker::commit`] after the host has rendered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a pending transition must be committed after rendering"]
pub struct PendingTransition {
    decision: TransitionDecision,
    depth: usize,
}

impl PendingTransition {
    /// The transition to play for this pass.
    #[must_use]
    pub fn decision(&self) -> TransitionDecision {
        self.decision
    }

    /// Depth that will be remembered once committed.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl TransitionTracker {
    /// Seeds the memory with the first location, so the first render fades.
    #[must_use]
    pub fn starting_at(location: &Location) -> Self {
        Self {
            previous_depth: location.depth(),
        }
    }

    /// Depth of the last committed render, 0 if none.
    #[must_use]
    pub fn previous_depth(&self) -> usize {
        self.previous_depth
    }

    /// Classifies `location` against the remembered depth without mutating it.
    pub fn begin(&self, location: &Location) -> PendingTransition {
        PendingTransition {
            decision: classify(location, self.previous_depth),
            depth: location.depth(),
        }
    }

    /// A fade that leaves the memory where it is, for passes whose location
    /// could not be read.
    pub(crate) fn hold(&self) -> PendingTransition {
        PendingTransition {
            decision: TransitionDecision::fade(),
            depth: self.previous_depth,
        }
    }

    /// Remembers the depth of a rendered pass.
    pub fn commit(&mut self, pending: PendingTransition) {
        if pending.depth != self.previous_depth {
            tracing::debug!(
                from = self.previous_depth,
                to = pending.depth,
                "remembering rendered depth"
            );
        }
        self.previous_depth = pending.depth;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationKey;
    use crate::transition::TransitionKind;
    use pretty_assertions::assert_eq;

    fn loc(path: &str, key: u64) -> Location {
        Location::new(path, LocationKey::new(key)).unwrap()
    }

    #[test]
    fn first_render_fades_when_seeded() {
        let start = loc("/wallets", 0);
        let tracker = TransitionTracker::starting_at(&start);
        assert_eq!(tracker.begin(&start).decision().kind, TransitionKind::Fade);
    }

    #[test]
    fn default_starts_at_sentinel() {
        let tracker = TransitionTracker::default();
        assert_eq!(tracker.previous_depth(), 0);
        assert_eq!(
            tracker.begin(&loc("/", 0)).decision().kind,
            TransitionKind::Push
        );
    }

    #[test]
    fn begin_twice_without_commit_is_stable() {
        let tracker = TransitionTracker::starting_at(&loc("/wallets", 0));
        let next = loc("/wallets/123/send", 1);
        let first = tracker.begin(&next);
        let second = tracker.begin(&next);
        assert_eq!(first, second);
        assert_eq!(first.decision(), TransitionDecision::push());
        assert_eq!(tracker.previous_depth(), 2);
    }

    #[test]
    fn commit_updates_memory_after_render() {
        let mut tracker = TransitionTracker::starting_at(&loc("/wallets", 0));
        let pending = tracker.begin(&loc("/wallets/123/send", 1));
        assert_eq!(tracker.previous_depth(), 2);
        tracker.commit(pending);
        assert_eq!(tracker.previous_depth(), 4);

        let back = tracker.begin(&loc("/wallets", 2));
        assert_eq!(back.decision(), TransitionDecision::pop());
    }

    #[test]
    fn fade_also_updates_memory() {
        let mut tracker = TransitionTracker::starting_at(&loc("/wallets", 0));
        let pending = tracker.begin(&loc("/settings", 1));
        assert_eq!(pending.decision().kind, TransitionKind::Fade);
        tracker.commit(pending);
        assert_eq!(tracker.previous_depth(), 2);
    }

    #[test]
    fn trackers_are_independent() {
        let mut a = TransitionTracker::starting_at(&loc("/", 0));
        let b = TransitionTracker::starting_at(&loc("/", 0));
        let pending = a.begin(&loc("/wallets/1", 1));
        a.commit(pending);
        assert_eq!(a.previous_depth(), 3);
        assert_eq!(b.previous_depth(), 1);
    }
}
