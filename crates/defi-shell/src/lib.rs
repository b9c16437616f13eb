//! # DeFi Shell
//!
//! UI-free core of the DeFi desktop client's root shell.
//!
//! The shell does two things on every render:
//!
//! - the [`ReadinessGate`] projects the process-wide [`ReadinessState`] onto a
//!   [`ViewMode`]: the launch screen until the node runs, then the running
//!   shell, marked inert behind an open modal;
//! - the transition classifier compares the incoming [`Location`] with the
//!   depth rendered last and picks a [`TransitionDecision`] for the host's
//!   animated swap container.
//!
//! Nothing here renders, performs IO or spawns tasks; the desktop crate wires
//! these decisions into Dioxus components.
//!
//! ## Example
//!
//! ```rust
//! use defi_shell::{
//!     InvalidLocationPolicy, LocationHistory, ReadinessGate, ReadinessState, TransitionKind,
//! };
//!
//! let mut gate = ReadinessGate::mount(|| { /* dispatch fetch */ }, InvalidLocationPolicy::Strict);
//! let mut history = LocationHistory::new();
//!
//! let state = ReadinessState { is_running: true, ..Default::default() };
//! assert!(gate.render(&state).mode.is_running());
//!
//! let home = history.observe("/wallets").unwrap();
//! let pending = gate.begin(&home);
//! gate.commit(pending);
//!
//! let send = history.observe("/wallets/123/send").unwrap();
//! let pending = gate.begin(&send);
//! assert_eq!(pending.decision().kind, TransitionKind::Push);
//! gate.commit(pending);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod gate;
pub mod location;
pub mod readiness;
pub mod tracker;
pub mod transition;

pub use error::{Result, ShellError};
pub use gate::{ConfigFetcher, ReadinessGate};
pub use location::{path_depth, Location, LocationHistory, LocationKey};
pub use readiness::{
    render_plan, view_mode, LaunchView, ReadinessState, RenderPlan, RunningShell, ViewMode,
    MODAL_OPEN_CLASS,
};
pub use tracker::{PendingTransition, TransitionTracker};
pub use transition::{
    classify, classify_path, classify_with_policy, InvalidLocationPolicy, SwapStage,
    TransitionDecision, TransitionKind, FADE_DURATION, SLIDE_DURATION,
};
