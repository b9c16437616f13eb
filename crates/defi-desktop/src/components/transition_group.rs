//! # Transition Group
//!
//! Animated swap container for routed content.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use defi_shell::{LocationKey, SwapStage, TransitionDecision};

/// Pause between mounting an entering route and starting its animation, so
/// its start styles are painted first.
const FRAME: Duration = Duration::from_millis(16);

/// Key of the route currently shown by a swap container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SwapKeys {
    active: LocationKey,
}

impl SwapKeys {
    fn new(initial: LocationKey) -> Self {
        Self { active: initial }
    }

    /// Records the key of the current render. Returns whether a new route
    /// entered and must be animated.
    fn enter(&mut self, key: LocationKey) -> bool {
        if key == self.active {
            return false;
        }
        self.active = key;
        true
    }
}

/// Plays `decision` each time `swap_key` changes.
///
/// The entering content moves through [`SwapStage::Enter`],
/// [`SwapStage::EnterActive`] and [`SwapStage::EnterDone`], carrying the
/// matching `transit-*` classes. The first mount does not animate, and a
/// re-render under the same key keeps the animation that was played.
#[component]
pub fn TransitionGroup(
    decision: TransitionDecision,
    swap_key: LocationKey,
    children: Element,
) -> Element {
    let latest = use_hook(|| Rc::new(Cell::new(decision)));
    latest.set(decision);

    let mut keys = use_signal(|| SwapKeys::new(swap_key));
    let mut stage = use_signal(|| SwapStage::EnterDone);
    let mut played = use_signal(|| decision);

    let pending = latest.clone();
    use_effect(use_reactive((&swap_key,), move |(swap_key,)| {
        if !keys.write().enter(swap_key) {
            return;
        }
        let decision = pending.get();
        played.set(decision);
        stage.set(SwapStage::Enter);

        spawn(async move {
            tokio::time::sleep(FRAME).await;
            if keys.peek().active != swap_key {
                return;
            }
            stage.set(SwapStage::EnterActive);

            tokio::time::sleep(decision.duration).await;
            if keys.peek().active == swap_key {
                stage.set(SwapStage::EnterDone);
            }
        });
    }));

    let shown = *played.read();
    let class = shown.class_for(*stage.read());
    let duration_ms = shown.duration_ms();

    rsx! {
        div {
            class: "transition-group",

            div {
                key: "{swap_key}",
                class: "{class}",
                style: "animation-duration: {duration_ms}ms; transition-duration: {duration_ms}ms;",

                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_mount_does_not_enter() {
        let mut keys = SwapKeys::new(LocationKey::new(0));
        assert!(!keys.enter(LocationKey::new(0)));
    }

    #[test]
    fn test_new_key_enters_once() {
        let mut keys = SwapKeys::new(LocationKey::new(0));
        assert!(keys.enter(LocationKey::new(1)));
        assert!(!keys.enter(LocationKey::new(1)));
        assert_eq!(keys.active, LocationKey::new(1));
    }

    #[test]
    fn test_rerender_after_commit_keeps_stage() {
        // /wallets/default -> /settings pops; the pop is committed, so the
        // next non-navigation render (error modal opening) classifies as a
        // fade under the same key. That render must not re-enter.
        let mut keys = SwapKeys::new(LocationKey::new(0));
        let mut entered = Vec::new();
        for key in [1, 1, 1, 2, 2] {
            entered.push(keys.enter(LocationKey::new(key)));
        }
        assert_eq!(entered, [true, false, false, true, false]);
    }
}
