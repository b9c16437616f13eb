//! Navigation transition classifier.
//!
//! Compares the depth of the location about to be rendered with the depth of
//! the one rendered last and picks the animation the swap container plays:
//!
//! | depth change | kind   | duration |
//! |--------------|--------|----------|
//! | shallower    | `pop`  | 300 ms   |
//! | deeper       | `push` | 300 ms   |
//! | same         | `fade` | 30 ms    |

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::location::{Location, LocationKey};

/// Duration of the directional push/pop slides.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Duration of the lateral cross-fade.
pub const FADE_DURATION: Duration = Duration::from_millis(30);

/// Direction of a route change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Navigated into a deeper view.
    Push,
    /// Navigated back to a shallower view.
    Pop,
    /// Moved laterally at the same depth.
    Fade,
}

impl TransitionKind {
    /// Base CSS class of the animation.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Push => "transit-push",
            Self::Pop => "transit-pop",
            Self::Fade => "transit-fade",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Fade => "fade",
        };
        f.write_str(name)
    }
}

/// Stage of an entering route inside the swap container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapStage {
    /// Mounted with the start styles.
    Enter,
    /// Animating towards the end styles.
    EnterActive,
    /// Animation finished.
    EnterDone,
}

impl SwapStage {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::EnterActive => "enter-active",
            Self::EnterDone => "enter-done",
        }
    }
}

/// Which animation to play and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionDecision {
    /// Animation direction.
    pub kind: TransitionKind,
    /// How long the animation runs.
    pub duration: Duration,
}

impl TransitionDecision {
    /// A directional slide deeper into the hierarchy.
    #[must_use]
    pub const fn push() -> Self {
        Self {
            kind: TransitionKind::Push,
            duration: SLIDE_DURATION,
        }
    }

    /// A directional slide back up the hierarchy.
    #[must_use]
    pub const fn pop() -> Self {
        Self {
            kind: TransitionKind::Pop,
            duration: SLIDE_DURATION,
        }
    }

    /// A near-instant cross-fade.
    #[must_use]
    pub const fn fade() -> Self {
        Self {
            kind: TransitionKind::Fade,
            duration: FADE_DURATION,
        }
    }

    /// Duration in whole milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }

    /// CSS classes for a route at `stage`, e.g. `transit-pop transit-pop-enter-active`.
    #[must_use]
    pub fn class_for(&self, stage: SwapStage) -> String {
        let base = self.kind.class_name();
        format!("{base} {base}-{}", stage.suffix())
    }
}

/// What to do when the router hands over a malformed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidLocationPolicy {
    /// Surface the error to the caller.
    Strict,
    /// Log it and play a fade so the shell keeps rendering.
    Fallback,
}

impl Default for InvalidLocationPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Fallback
        }
    }
}

/// Decides the transition for `current` given the depth rendered last.
///
/// `previous_depth` of 0 means nothing was rendered before. The function is
/// pure, so speculative re-renders may call it any number of times.
#[must_use]
pub fn classify(current: &Location, previous_depth: usize) -> TransitionDecision {
    decide(current.depth(), previous_depth)
}

/// Classifies a raw router path.
///
/// # Errors
///
/// Returns [`crate::ShellError::InvalidLocation`] if the path is empty or
/// relative.
pub fn classify_path(path: &str, previous_depth: usize) -> Result<TransitionDecision> {
    let location = Location::new(path, LocationKey::new(0))?;
    Ok(classify(&location, previous_depth))
}

/// Classifies a raw router path, applying `policy` to malformed input.
///
/// # Errors
///
/// Only fails under [`InvalidLocationPolicy::Strict`].
pub fn classify_with_policy(
    path: &str,
    previous_depth: usize,
    policy: InvalidLocationPolicy,
) -> Result<TransitionDecision> {
    match classify_path(path, previous_depth) {
        Ok(decision) => Ok(decision),
        Err(err) => match policy {
            InvalidLocationPolicy::Strict => Err(err),
            InvalidLocationPolicy::Fallback => {
                tracing::warn!(error = %err, "malformed location, falling back to fade");
                Ok(TransitionDecision::fade())
            }
        },
    }
}

fn decide(depth: usize, previous_depth: usize) -> TransitionDecision {
    let decision = match depth.cmp(&previous_depth) {
        std::cmp::Ordering::Less => TransitionDecision::pop(),
        std::cmp::Ordering::Greater => TransitionDecision::push(),
        std::cmp::Ordering::Equal => TransitionDecision::fade(),
    };
    tracing::trace!(depth, previous_depth, kind = %decision.kind, "classified transition");
    decision
}
