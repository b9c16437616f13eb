//! The readiness gate at the root of the client.
//!
//! The gate decides, on every render, whether the launch screen or the
//! running shell is shown, and owns the depth memory the running shell uses
//! to animate route changes. On mount it asks the RPC configuration
//! collaborator for its configuration, once, without awaiting the outcome.

use crate::error::{Result, ShellError};
use crate::location::{Location, LocationKey};
use crate::readiness::{render_plan, ReadinessState, RenderPlan};
use crate::tracker::{PendingTransition, TransitionTracker};
use crate::transition::InvalidLocationPolicy;

/// Trigger for the remote configuration fetch.
///
/// Implementations dispatch the request and return immediately. Success and
/// failure are reported back through [`ReadinessState`], never to the gate.
pub trait ConfigFetcher {
    /// Dispatches the configuration request.
    fn request_configs(&self);
}

impl<F: Fn()> ConfigFetcher for F {
    fn request_configs(&self) {
        self();
    }
}

/// Root decision point between the launch screen and the running shell.
#[derive(Debug)]
pub struct ReadinessGate<F> {
    fetcher: F,
    policy: InvalidLocationPolicy,
    tracker: TransitionTracker,
}

impl<F: ConfigFetcher> ReadinessGate<F> {
    /// Mounts the gate and dispatches the one configuration request.
    pub fn mount(fetcher: F, policy: InvalidLocationPolicy) -> Self {
        tracing::info!(?policy, "mounting readiness gate");
        fetcher.request_configs();
        Self {
            fetcher,
            policy,
            tracker: TransitionTracker::default(),
        }
    }

    /// Mounts the gate with depth memory seeded from the initial location.
    pub fn mount_at(fetcher: F, policy: InvalidLocationPolicy, initial: &Location) -> Self {
        let mut gate = Self::mount(fetcher, policy);
        gate.tracker = TransitionTracker::starting_at(initial);
        gate
    }
}

impl<F> ReadinessGate<F> {
    /// Projects `state` onto what to render. Pure.
    #[must_use]
    pub fn render(&self, state: &ReadinessState) -> RenderPlan {
        render_plan(state)
    }

    /// Classifies the location of the pass about to render.
    pub fn begin(&self, location: &Location) -> PendingTransition {
        let pending = self.tracker.begin(location);
        tracing::debug!(
            path = location.path(),
            key = %location.key(),
            kind = %pending.decision().kind,
            duration_ms = pending.decision().duration_ms(),
            "route transition"
        );
        pending
    }

    /// Classifies a raw router path under the gate's policy.
    ///
    /// Under [`InvalidLocationPolicy::Fallback`] a malformed path fades and
    /// leaves the depth memory unchanged once committed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShellError::InvalidLocation`] for a malformed path
    /// under [`InvalidLocationPolicy::Strict`].
    pub fn begin_path(&self, path: &str, key: LocationKey) -> Result<PendingTransition> {
        match Location::new(path, key) {
            Ok(location) => Ok(self.begin(&location)),
            Err(err) => self.recover(err),
        }
    }

    /// Applies the gate's policy to a location that failed validation.
    ///
    /// # Errors
    ///
    /// Returns `err` back under [`InvalidLocationPolicy::Strict`].
    pub fn recover(&self, err: ShellError) -> Result<PendingTransition> {
        match self.policy {
            InvalidLocationPolicy::Strict => {
                tracing::error!(error = %err, "malformed location");
                Err(err)
            }
            InvalidLocationPolicy::Fallback => {
                tracing::warn!(error = %err, "malformed location, falling back to fade");
                Ok(self.tracker.hold())
            }
        }
    }

    /// Records that the pass classified by `pending` has rendered.
    pub fn commit(&mut self, pending: PendingTransition) {
        self.tracker.commit(pending);
    }

    /// The depth memory.
    #[must_use]
    pub fn tracker(&self) -> &TransitionTracker {
        &self.tracker
    }

    /// The policy applied to malformed locations.
    #[must_use]
    pub fn policy(&self) -> InvalidLocationPolicy {
        self.policy
    }

    /// The configuration fetch collaborator.
    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::ViewMode;
    use crate::transition::{TransitionDecision, TransitionKind};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingFetcher {
        calls: Cell<u32>,
    }

    impl ConfigFetcher for CountingFetcher {
        fn request_configs(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn loc(path: &str, key: u64) -> Location {
        Location::new(path, LocationKey::new(key)).unwrap()
    }

    #[test]
    fn mount_requests_configs_once() {
        let gate = ReadinessGate::mount(CountingFetcher::default(), InvalidLocationPolicy::Strict);
        assert_eq!(gate.fetcher().calls.get(), 1);

        let state = ReadinessState::default();
        let _ = gate.render(&state);
        let _ = gate.render(&state);
        let _ = gate.begin(&loc("/wallets", 1));
        assert_eq!(gate.fetcher().calls.get(), 1);
    }

    #[test]
    fn closure_fetcher_is_invoked() {
        let fired = Cell::new(false);
        let _gate = ReadinessGate::mount(|| fired.set(true), InvalidLocationPolicy::Strict);
        assert!(fired.get());
    }

    #[test]
    fn render_is_a_projection() {
        let gate = ReadinessGate::mount(CountingFetcher::default(), InvalidLocationPolicy::Strict);
        let state = ReadinessState {
            is_running: true,
            ..Default::default()
        };
        assert_eq!(gate.render(&state), gate.render(&state));
        assert!(matches!(gate.render(&state).mode, ViewMode::Running(_)));
    }

    #[test]
    fn navigation_sequence() {
        let start = loc("/wallets", 0);
        let mut gate = ReadinessGate::mount_at(
            CountingFetcher::default(),
            InvalidLocationPolicy::Strict,
            &start,
        );

        let steps = [
            ("/wallets", TransitionKind::Fade),
            ("/wallets/123/send", TransitionKind::Push),
            ("/wallets", TransitionKind::Pop),
            ("/settings", TransitionKind::Fade),
            ("/", TransitionKind::Pop),
        ];
        for (key, (path, expected)) in (0u64..).zip(steps) {
            let pending = gate.begin(&loc(path, key));
            assert_eq!(pending.decision().kind, expected, "navigating to {path}");
            gate.commit(pending);
        }
        assert_eq!(gate.tracker().previous_depth(), 1);
    }

    #[test]
    fn strict_gate_rejects_malformed_path() {
        let gate = ReadinessGate::mount(CountingFetcher::default(), InvalidLocationPolicy::Strict);
        let err = gate.begin_path("", LocationKey::new(3)).unwrap_err();
        assert!(matches!(err, ShellError::InvalidLocation { .. }));
    }

    #[test]
    fn fallback_gate_fades_and_keeps_memory() {
        let mut gate = ReadinessGate::mount_at(
            CountingFetcher::default(),
            InvalidLocationPolicy::Fallback,
            &loc("/wallets/123", 0),
        );
        let pending = gate.begin_path("wallets", LocationKey::new(1)).unwrap();
        assert_eq!(pending.decision(), TransitionDecision::fade());
        gate.commit(pending);
        assert_eq!(gate.tracker().previous_depth(), 3);
    }

    #[test]
    fn recover_follows_policy() {
        let err = ShellError::invalid_location("", "path is empty");
        let strict = ReadinessGate::mount(|| {}, InvalidLocationPolicy::Strict);
        assert_eq!(strict.recover(err.clone()), Err(err.clone()));

        let fallback = ReadinessGate::mount(|| {}, InvalidLocationPolicy::Fallback);
        assert_eq!(
            fallback.recover(err).map(|p| p.decision()),
            Ok(TransitionDecision::fade())
        );
    }

    #[test]
    fn begin_path_accepts_valid_path() {
        let gate = ReadinessGate::mount(CountingFetcher::default(), InvalidLocationPolicy::Fallback);
        let pending = gate.begin_path("/wallets", LocationKey::new(0)).unwrap();
        assert_eq!(pending.decision(), TransitionDecision::push());
        assert_eq!(gate.policy(), InvalidLocationPolicy::Fallback);
    }
}
